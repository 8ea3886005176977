//! The event loop: terminal input and timer ticks on one task.

use crossterm::event::EventStream;
use futures_util::StreamExt;
use termfolio_common::{Event, TermfolioError};
use termfolio_config::schema::TermfolioConfig;
use termfolio_content::Tab;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::core::TermfolioApp;
use super::render;
use super::terminal::TerminalSession;

/// Take over the terminal and run until the user quits.
pub async fn run(config: TermfolioConfig, start_tab: Tab) -> Result<(), TermfolioError> {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = TermfolioApp::new(config, start_tab, tx);

    let result = match TerminalSession::enter() {
        Ok(mut session) => app.run_loop(&mut session, rx).await,
        Err(e) => Err(e.into()),
    };
    app.shutdown();
    result
}

impl TermfolioApp {
    async fn run_loop(
        &mut self,
        session: &mut TerminalSession,
        mut timers: UnboundedReceiver<Event>,
    ) -> Result<(), TermfolioError> {
        let size = session.size()?;
        self.resize(size.width, size.height);
        let mut input = EventStream::new();

        tracing::info!("Entering event loop");
        loop {
            if self.needs_redraw {
                session.draw(|frame| render::draw(frame, self))?;
                self.needs_redraw = false;
            }
            if self.should_exit {
                return Ok(());
            }

            tokio::select! {
                event = input.next() => match event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        tracing::info!("Terminal input closed");
                        return Ok(());
                    }
                },
                Some(event) = timers.recv() => self.handle_timer_event(event),
            }
        }
    }

    /// Stop every timer. Called once on the way out.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Shutting down");
        self.handle_timer_event(Event::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_timers() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = TermfolioApp::new(TermfolioConfig::default(), Tab::Home, tx);
        assert!(app.typewriter.scheduler().is_blinking());
        app.shutdown();
        assert!(!app.typewriter.scheduler().is_blinking());
        assert!(!app.typewriter.scheduler().is_revealing());
    }

    #[tokio::test(start_paused = true)]
    async fn reveal_ticks_from_channel_type_the_text() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = TermfolioApp::new(TermfolioConfig::default(), Tab::Home, tx);
        let mut ticks = 0;
        while ticks < 7 {
            let event = rx.recv().await.unwrap();
            if matches!(event, Event::RevealTick(_)) {
                ticks += 1;
            }
            app.handle_timer_event(event);
        }
        assert_eq!(app.typewriter.typist().current_output(), "Welcome");
    }
}
