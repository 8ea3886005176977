//! Termfolio configuration system.
//!
//! TOML-based configuration with validation. All sections use serde
//! defaults so a partial file (or none at all) works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use termfolio_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{TermfolioConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use termfolio_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created with documentation comments if missing.
/// The result is validated; invalid values are an error.
pub fn load_config(path: Option<&Path>) -> Result<TermfolioConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TermfolioConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
