//! Core types and constructors for WindowController.

use serde::{Deserialize, Serialize};
use termfolio_common::types::Point;

use crate::drag::DragAnchor;

/// Snapshot of everything the renderer needs to place the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    /// Cell offset from the default centred placement.
    pub position: Point,
    pub is_dragging: bool,
    /// Collapsed to the title bar.
    pub is_minimized: bool,
    /// Filling the viewport. Position is always the origin while set.
    pub is_maximized: bool,
    /// Toggled by the dock.
    pub is_visible: bool,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            is_dragging: false,
            is_minimized: false,
            is_maximized: false,
            is_visible: true,
        }
    }
}

/// Owns the window state and the anchor of the drag in progress, if any.
#[derive(Debug, Clone, Default)]
pub struct WindowController {
    pub(super) state: WindowState,
    /// `Some` exactly while `state.is_dragging`.
    pub(super) anchor: Option<DragAnchor>,
}

impl WindowController {
    /// A visible window at its default placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary state. A drag cannot be restored, so
    /// `is_dragging` is cleared; a maximized state has its position zeroed.
    pub fn with_state(mut state: WindowState) -> Self {
        state.is_dragging = false;
        if state.is_maximized {
            state.position = Point::ORIGIN;
        }
        Self {
            state,
            anchor: None,
        }
    }

    // -- Accessors --

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn anchor(&self) -> Option<DragAnchor> {
        self.anchor
    }
}
