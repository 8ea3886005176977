//! Timer tasks with explicit cancellation.

mod scheduler;
mod timer;

pub use scheduler::*;
pub use timer::*;
