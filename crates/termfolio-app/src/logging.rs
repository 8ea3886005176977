//! Tracing setup. The UI owns stdout, so logs go to a file or nowhere.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use termfolio_common::TermfolioError;
use termfolio_config::schema::LoggingConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// `termfolio.log` in the platform data dir.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("termfolio").join("termfolio.log"))
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// file logging is off.
pub fn init(
    config: &LoggingConfig,
    override_directive: Option<&str>,
) -> Result<Option<PathBuf>, TermfolioError> {
    if !config.file_logging {
        return Ok(None);
    }

    let raw = override_directive.unwrap_or(config.level.directive());
    let filter = EnvFilter::from_default_env().add_directive(parse_directive(raw));

    let path = log_file_path()
        .ok_or_else(|| TermfolioError::Logging("no data directory on this platform".into()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TermfolioError::Logging(e.to_string()))?;
    Ok(Some(path))
}

/// Parse a filter directive, falling back to `info` when it is malformed.
fn parse_directive(raw: &str) -> Directive {
    raw.parse().unwrap_or_else(|_| LevelFilter::INFO.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_target_directives() {
        assert_eq!(parse_directive("termfolio=trace").to_string(), "termfolio=trace");
        assert_eq!(parse_directive("debug").to_string(), "debug");
    }

    #[test]
    fn malformed_directive_falls_back_to_info() {
        assert_eq!(parse_directive("termfolio=loud").to_string(), "info");
    }

    #[test]
    fn log_file_lives_under_termfolio_dir() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("termfolio/termfolio.log"));
        }
    }

    #[test]
    fn disabled_file_logging_installs_nothing() {
        let config = LoggingConfig {
            file_logging: false,
            ..LoggingConfig::default()
        };
        assert!(init(&config, None).unwrap().is_none());
    }
}
