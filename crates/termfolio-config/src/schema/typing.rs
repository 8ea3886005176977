//! Typewriter timing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Delay between revealed characters (valid range: 1-1000).
    pub reveal_interval_ms: u32,
    /// Cursor blink half-period (valid range: 100-2000).
    pub cursor_blink_interval_ms: u32,
    /// Glyph drawn after the revealed text.
    pub cursor_glyph: String,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: 20,
            cursor_blink_interval_ms: 500,
            cursor_glyph: "▋".into(),
        }
    }
}

impl TypingConfig {
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.reveal_interval_ms))
    }

    pub fn cursor_blink_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.cursor_blink_interval_ms))
    }
}
