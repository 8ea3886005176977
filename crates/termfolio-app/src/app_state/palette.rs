//! Configured hex colors resolved to terminal colors.

use ratatui::style::Color as TuiColor;
use termfolio_common::Color;
use termfolio_config::schema::ColorConfig;

/// Colors used by every widget. Built once from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Palette {
    pub text: TuiColor,
    pub link: TuiColor,
    pub chrome: TuiColor,
    pub border: TuiColor,
    pub muted: TuiColor,
}

impl Palette {
    /// Unparseable entries fall back to the default color for that slot.
    pub fn from_config(colors: &ColorConfig) -> Self {
        let defaults = ColorConfig::default();
        Self {
            text: resolve(&colors.text, &defaults.text),
            link: resolve(&colors.link, &defaults.link),
            chrome: resolve(&colors.chrome, &defaults.chrome),
            border: resolve(&colors.border, &defaults.border),
            muted: resolve(&colors.muted, &defaults.muted),
        }
    }
}

fn resolve(hex: &str, fallback: &str) -> TuiColor {
    Color::from_hex(hex)
        .or_else(|| Color::from_hex(fallback))
        .map(|c| TuiColor::Rgb(c.r, c.g, c.b))
        .unwrap_or(TuiColor::Reset)
}
