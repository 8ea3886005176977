//! Validation for the color palette.

use crate::schema::TermfolioConfig;

use super::helpers::validate_hex_color;

pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &TermfolioConfig) {
    let colors = &config.colors;
    validate_hex_color(errors, "colors.text", &colors.text);
    validate_hex_color(errors, "colors.link", &colors.link);
    validate_hex_color(errors, "colors.chrome", &colors.chrome);
    validate_hex_color(errors, "colors.border", &colors.border);
    validate_hex_color(errors, "colors.muted", &colors.muted);
}
