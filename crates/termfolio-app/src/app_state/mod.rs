//! Top-level application state.
//!
//! Owns the window controller, navigation, and typewriter, and drives them
//! from terminal input and timer events on a single task.

mod actions;
mod core;
mod dispatch;
mod event_handler;
mod layout;
mod palette;
mod render;
mod run;
mod terminal;
mod types;

pub use core::resolve_start_tab;
pub use run::run;
pub use terminal::restore_terminal;
