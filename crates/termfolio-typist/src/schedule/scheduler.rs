//! Reveal and blink timers for one typist.

use std::time::Duration;

use termfolio_common::{Event, SessionId};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use super::timer::TimerHandle;

/// Timer periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub reveal: Duration,
    pub blink: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal: Duration::from_millis(20),
            blink: Duration::from_millis(500),
        }
    }
}

/// Owns at most one reveal timer and one blink timer.
///
/// Everything is cancelled when the scheduler is dropped. Must be used from
/// inside a tokio runtime.
#[derive(Debug)]
pub struct RevealScheduler {
    tx: UnboundedSender<Event>,
    timings: Timings,
    reveal: Option<TimerHandle>,
    blink: Option<TimerHandle>,
}

impl RevealScheduler {
    pub fn new(tx: UnboundedSender<Event>, timings: Timings) -> Self {
        Self {
            tx,
            timings,
            reveal: None,
            blink: None,
        }
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Cancel the running reveal timer and start one for `session`.
    pub fn restart_reveal(&mut self, session: SessionId) {
        self.cancel_reveal();
        debug!(%session, "starting reveal timer");
        self.reveal = Some(TimerHandle::spawn_interval(
            self.timings.reveal,
            Event::RevealTick(session),
            self.tx.clone(),
        ));
    }

    pub fn cancel_reveal(&mut self) {
        if let Some(timer) = self.reveal.take() {
            timer.cancel();
        }
    }

    pub fn is_revealing(&self) -> bool {
        self.reveal.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Start the cursor blink timer. No-op if it is already running.
    pub fn start_blink(&mut self) {
        if self.is_blinking() {
            return;
        }
        self.blink = Some(TimerHandle::spawn_interval(
            self.timings.blink,
            Event::CursorBlink,
            self.tx.clone(),
        ));
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Cancel every timer.
    pub fn shutdown(&mut self) {
        self.cancel_reveal();
        if let Some(timer) = self.blink.take() {
            timer.cancel();
        }
    }
}

impl Drop for RevealScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
