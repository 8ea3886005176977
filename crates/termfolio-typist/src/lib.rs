//! Typewriter reveal of content text with a blinking cursor.
//!
//! [`ContentTypist`] is the pure state machine. [`RevealScheduler`] owns the
//! timers that drive it, and [`Typewriter`] wires the two together for a
//! single-owner event loop.

pub mod schedule;
pub mod session;
pub mod typist;
pub mod typewriter;

pub use schedule::{RevealScheduler, TimerHandle, Timings};
pub use session::TypingSession;
pub use typewriter::Typewriter;
pub use typist::{ContentTypist, TickOutcome};
