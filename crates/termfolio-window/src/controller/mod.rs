//! The WindowController tracks drag, minimize, maximize, and visibility.

mod operations;
mod types;

pub use types::*;
