//! TermfolioApp struct definition and constructor.

use termfolio_common::types::Rect;
use termfolio_common::Event;
use termfolio_config::schema::TermfolioConfig;
use termfolio_content::{ContentProvider, Navigation, StaticContent, Tab};
use termfolio_typist::{Timings, Typewriter};
use termfolio_window::{WindowController, WindowGeometry, WindowState};
use tokio::sync::mpsc::UnboundedSender;

use super::layout::ScreenLayout;
use super::palette::Palette;

/// Top-level application state.
pub struct TermfolioApp {
    pub(super) config: TermfolioConfig,
    pub(super) palette: Palette,

    // Window chrome
    pub(super) window: WindowController,
    pub(super) geometry: WindowGeometry,

    // Content
    pub(super) navigation: Navigation,
    pub(super) content: Box<dyn ContentProvider>,
    pub(super) typewriter: Typewriter,
    /// Highlighted post link on the blog listing.
    pub(super) link_cursor: usize,

    /// Last known terminal size.
    pub(super) screen: Rect,

    pub(super) should_exit: bool,

    // Dirty flag -- set when state changes and a redraw is needed
    pub(super) needs_redraw: bool,
}

impl TermfolioApp {
    /// Must be called inside a tokio runtime; the cursor blink starts
    /// immediately and the start tab begins typing.
    pub fn new(config: TermfolioConfig, start_tab: Tab, tx: UnboundedSender<Event>) -> Self {
        let timings = Timings {
            reveal: config.typing.reveal_interval(),
            blink: config.typing.cursor_blink_interval(),
        };
        let window = WindowController::with_state(WindowState {
            is_maximized: config.window.start_maximized,
            is_visible: !config.window.start_hidden,
            ..WindowState::default()
        });
        let mut app = Self {
            palette: Palette::from_config(&config.colors),
            geometry: WindowGeometry::new(config.window.width, config.window.height),
            window,
            navigation: Navigation::new(start_tab),
            content: Box::new(StaticContent),
            typewriter: Typewriter::new(tx, timings),
            link_cursor: 0,
            screen: Rect::default(),
            should_exit: false,
            needs_redraw: true,
            config,
        };
        app.refresh_content();
        app
    }

    /// Retype the content area for the current section.
    pub(super) fn refresh_content(&mut self) {
        let text = self.content.render(self.navigation.section());
        let session = self.typewriter.set_target(text);
        tracing::debug!(%session, tab = %self.navigation.active_tab(), "typing new content");
        self.needs_redraw = true;
    }

    pub(super) fn resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        self.needs_redraw = true;
    }

    /// Layout for the last known terminal size.
    pub(super) fn layout(&self) -> ScreenLayout {
        self.layout_in(self.screen)
    }

    pub(super) fn layout_in(&self, screen: Rect) -> ScreenLayout {
        ScreenLayout::compute(
            screen,
            &self.geometry,
            &self.window.state(),
            &self.navigation,
        )
    }

}

/// Pick the start tab from the CLI flag or the config. Unknown names open
/// the home tab.
pub fn resolve_start_tab(cli: Option<&str>, configured: &str) -> Tab {
    let name = cli.unwrap_or(configured);
    Tab::from_name(name).unwrap_or_else(|| {
        tracing::warn!(tab = name, "Unknown start tab, opening home");
        Tab::Home
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn cli_tab_wins_over_config() {
        assert_eq!(resolve_start_tab(Some("blog"), "about"), Tab::Blog);
        assert_eq!(resolve_start_tab(None, "about"), Tab::About);
    }

    #[test]
    fn unknown_start_tab_is_home() {
        assert_eq!(resolve_start_tab(Some("resume"), "about"), Tab::Home);
    }

    #[tokio::test(start_paused = true)]
    async fn new_app_starts_typing_start_tab() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let app = TermfolioApp::new(TermfolioConfig::default(), Tab::Contact, tx);
        assert_eq!(app.navigation.active_tab(), Tab::Contact);
        assert!(app
            .typewriter
            .typist()
            .target_text()
            .contains("echo $CONTACT_INFO"));
        assert_eq!(app.typewriter.typist().current_output(), "");
        assert!(app.typewriter.scheduler().is_revealing());
    }

    #[tokio::test(start_paused = true)]
    async fn layout_follows_window_state() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = TermfolioApp::new(TermfolioConfig::default(), Tab::Home, tx);
        app.resize(100, 40);
        assert_eq!(app.layout().window.unwrap().frame, Rect::new(10, 6, 80, 24));

        app.window.toggle_maximize();
        assert_eq!(app.layout().window.unwrap().frame, Rect::new(0, 0, 100, 37));

        app.window.toggle_visible();
        assert!(app.layout().window.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn window_flags_come_from_config() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut config = TermfolioConfig::default();
        config.window.start_maximized = true;
        config.window.start_hidden = true;
        config.window.width = 60;
        let app = TermfolioApp::new(config, Tab::Home, tx);
        assert!(app.window.state().is_maximized);
        assert!(!app.window.state().is_visible);
        assert_eq!(app.geometry.width, 60);
    }
}
