//! Color palette.

use serde::{Deserialize, Serialize};

/// Hex colors (`#rrggbb`) for the window chrome and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Typed content and cursor.
    pub text: String,
    /// Blog links and the back button.
    pub link: String,
    /// Title bar and tab strip background.
    pub chrome: String,
    pub border: String,
    /// Inactive tabs and the title.
    pub muted: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            text: "#4ade80".into(),
            link: "#60a5fa".into(),
            chrome: "#1f2937".into(),
            border: "#374151".into(),
            muted: "#9ca3af".into(),
        }
    }
}
