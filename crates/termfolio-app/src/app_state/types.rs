//! Layout constants and labels for the terminal front end.

/// Rows reserved at the bottom of the screen for the dock.
pub(super) const DOCK_HEIGHT: u16 = 3;

/// Width of the dock button, borders included.
pub(super) const DOCK_WIDTH: u16 = 16;

pub(super) const DOCK_LABEL: &str = "Terminal";

/// Drawn on the dock's bottom border while the window is shown.
pub(super) const ACTIVE_DOT: &str = "•";

/// Icon at the left of the title bar.
pub(super) const PROMPT_ICON: &str = ">_";

/// Rows taken by the image placeholder box.
pub(super) const IMAGE_HEIGHT: u16 = 3;

/// Columns between two tab labels.
pub(super) const TAB_GAP: u16 = 1;

pub(super) const BACK_LABEL: &str = "← back to blog list";
