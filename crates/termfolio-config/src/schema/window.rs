//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Simulated window appearance and startup state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown centred in the title bar.
    pub title: String,
    /// Restored width in cells (valid range: 20-400).
    pub width: u16,
    /// Restored height in cells (valid range: 5-200).
    pub height: u16,
    pub start_maximized: bool,
    /// Start with only the dock showing.
    pub start_hidden: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Ibrahim Zaman - Terminal Web".into(),
            width: 80,
            height: 24,
            start_maximized: false,
            start_hidden: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Ibrahim Zaman - Terminal Web");
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 24);
        assert!(!config.start_maximized);
        assert!(!config.start_hidden);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("width = 100\nstart_maximized = true\n").unwrap();
        assert_eq!(config.width, 100);
        assert!(config.start_maximized);
        assert_eq!(config.height, 24);
    }
}
