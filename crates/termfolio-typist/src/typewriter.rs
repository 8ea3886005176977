//! Typist plus its timers, driven by events from a single owner.

use termfolio_common::{Event, SessionId};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::schedule::{RevealScheduler, Timings};
use crate::typist::{ContentTypist, TickOutcome};

/// Feeds timer events into a [`ContentTypist`] and keeps the reveal timer
/// running only while there is text left to reveal.
#[derive(Debug)]
pub struct Typewriter {
    typist: ContentTypist,
    scheduler: RevealScheduler,
}

impl Typewriter {
    /// Starts the cursor blink immediately. Must be called inside a tokio
    /// runtime.
    pub fn new(tx: UnboundedSender<Event>, timings: Timings) -> Self {
        let mut scheduler = RevealScheduler::new(tx, timings);
        scheduler.start_blink();
        Self {
            typist: ContentTypist::new(),
            scheduler,
        }
    }

    pub fn typist(&self) -> &ContentTypist {
        &self.typist
    }

    pub fn scheduler(&self) -> &RevealScheduler {
        &self.scheduler
    }

    /// Start typing `text`, cancelling any reveal in flight.
    pub fn set_target(&mut self, text: impl Into<String>) -> SessionId {
        let session = self.typist.set_target(text);
        if self.typist.is_complete() {
            self.scheduler.cancel_reveal();
        } else {
            self.scheduler.restart_reveal(session);
        }
        session
    }

    /// Show the rest of the text now and stop the reveal timer.
    pub fn skip(&mut self) {
        self.typist.reveal_all();
        self.scheduler.cancel_reveal();
    }

    /// Apply a timer event. Returns `true` if the visible output changed.
    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::RevealTick(session) => match self.typist.tick(session) {
                TickOutcome::Advanced => true,
                TickOutcome::Completed => {
                    if self.scheduler.is_revealing() {
                        debug!(%session, "reveal complete");
                        self.scheduler.cancel_reveal();
                    }
                    true
                }
                TickOutcome::Stale => false,
            },
            Event::CursorBlink => {
                self.typist.toggle_cursor();
                true
            }
            Event::Shutdown => {
                self.scheduler.shutdown();
                false
            }
        }
    }
}
