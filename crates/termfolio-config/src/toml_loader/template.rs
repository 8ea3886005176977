//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Termfolio Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Ibrahim Zaman - Terminal Web"
# width = 80               # 20-400 cells
# height = 24              # 5-200 cells
# start_maximized = false
# start_hidden = false

[typing]
# reveal_interval_ms = 20          # 1-1000
# cursor_blink_interval_ms = 500   # 100-2000
# cursor_glyph = "▋"

[colors]
# text = "#4ade80"
# link = "#60a5fa"
# chrome = "#1f2937"
# border = "#374151"
# muted = "#9ca3af"

[startup]
tab = "home"               # home, about, projects, blog, contact

[logging]
# level = "info"           # trace, debug, info, warn, error
# file_logging = true
"##
    .to_string()
}
