//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&TermfolioConfig::default()).is_ok());
}

#[test]
fn catches_reveal_interval_zero() {
    let mut config = TermfolioConfig::default();
    config.typing.reveal_interval_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("typing.reveal_interval_ms"));
}

#[test]
fn catches_blink_interval_too_fast() {
    let mut config = TermfolioConfig::default();
    config.typing.cursor_blink_interval_ms = 50;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("typing.cursor_blink_interval_ms"));
}

#[test]
fn catches_multi_char_cursor() {
    let mut config = TermfolioConfig::default();
    config.typing.cursor_glyph = "__".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("typing.cursor_glyph"));
}

#[test]
fn catches_window_too_small() {
    let mut config = TermfolioConfig::default();
    config.window.width = 10;
    config.window.height = 2;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("window.height"));
}

#[test]
fn catches_bad_color() {
    let mut config = TermfolioConfig::default();
    config.colors.link = "blue".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("colors.link"));
}

#[test]
fn catches_color_without_hash() {
    let mut config = TermfolioConfig::default();
    config.colors.text = "4ade80".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("colors.text"));
}

#[test]
fn catches_unknown_startup_tab() {
    let mut config = TermfolioConfig::default();
    config.startup.tab = "resume".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("startup.tab"));
    assert!(err.contains("home, about, projects, blog, contact"));
}

#[test]
fn accepts_every_tab_name() {
    for tab in Tab::ALL {
        let mut config = TermfolioConfig::default();
        config.startup.tab = tab.name().into();
        assert!(validate(&config).is_ok(), "{tab} rejected");
    }
}

#[test]
fn collects_multiple_errors() {
    let mut config = TermfolioConfig::default();
    config.typing.reveal_interval_ms = 5000;
    config.colors.border = "#12".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("; "));
}
