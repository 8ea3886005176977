//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod colors;
mod helpers;
mod window;

#[cfg(test)]
mod tests;

use crate::schema::TermfolioConfig;
use termfolio_common::ConfigError;
use termfolio_content::Tab;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TermfolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    window::validate_typing(&mut errors, config);
    colors::validate_colors(&mut errors, config);

    if Tab::from_name(&config.startup.tab).is_none() {
        let names: Vec<&str> = Tab::ALL.iter().map(Tab::name).collect();
        errors.push(format!(
            "startup.tab = {:?} is not one of {}",
            config.startup.tab,
            names.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
