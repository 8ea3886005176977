//! Types for window placement and hit testing.

use serde::{Deserialize, Serialize};

/// Rows occupied by the title bar.
pub const HEADER_HEIGHT: u16 = 1;

/// Cells per window button, e.g. `[-]`.
pub const CONTROL_WIDTH: u16 = 3;

/// A clickable button in the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowControl {
    Minimize,
    Maximize,
}

impl WindowControl {
    pub const ALL: [WindowControl; 2] = [WindowControl::Minimize, WindowControl::Maximize];

    pub fn glyph(&self) -> &'static str {
        match self {
            WindowControl::Minimize => "[-]",
            WindowControl::Maximize => "[+]",
        }
    }
}

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Control(WindowControl),
    /// Title bar outside the buttons.
    Header,
    /// Anything below the title bar.
    Body,
}

/// Normal (restored) window size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub width: u16,
    pub height: u16,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl WindowGeometry {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(CONTROL_WIDTH * 3),
            height: height.max(HEADER_HEIGHT + 1),
        }
    }
}
