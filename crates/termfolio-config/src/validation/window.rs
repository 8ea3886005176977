//! Validation for the window and typing sections.

use crate::schema::TermfolioConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &TermfolioConfig) {
    validate_range(errors, "window.width", u32::from(config.window.width), 20, 400);
    validate_range(errors, "window.height", u32::from(config.window.height), 5, 200);
}

pub(crate) fn validate_typing(errors: &mut Vec<String>, config: &TermfolioConfig) {
    validate_range(
        errors,
        "typing.reveal_interval_ms",
        config.typing.reveal_interval_ms,
        1,
        1000,
    );
    validate_range(
        errors,
        "typing.cursor_blink_interval_ms",
        config.typing.cursor_blink_interval_ms,
        100,
        2000,
    );
    if config.typing.cursor_glyph.chars().count() != 1 {
        errors.push(format!(
            "typing.cursor_glyph = {:?} must be a single character",
            config.typing.cursor_glyph
        ));
    }
}
