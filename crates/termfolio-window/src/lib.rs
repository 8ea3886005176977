pub mod commands;
pub mod controller;
pub mod drag;
pub mod geometry;

pub use commands::WindowCommand;
pub use controller::{WindowController, WindowState};
pub use drag::{DragAnchor, PressOrigin};
pub use geometry::{HitTarget, WindowControl, WindowGeometry};
