//! The Content Typist state machine.

use termfolio_common::SessionId;

use crate::session::TypingSession;

/// Result of feeding one reveal tick to the typist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One more char is visible; more remain.
    Advanced,
    /// The whole target is visible. The reveal schedule can stop.
    Completed,
    /// The tick belongs to a superseded session and was ignored.
    Stale,
}

/// Holds the current typing session and the cursor blink phase.
#[derive(Debug, Clone)]
pub struct ContentTypist {
    session: TypingSession,
    cursor_visible: bool,
}

impl Default for ContentTypist {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTypist {
    /// An empty, already complete session with the cursor shown.
    pub fn new() -> Self {
        Self {
            session: TypingSession::new(SessionId::INITIAL, String::new()),
            cursor_visible: true,
        }
    }

    /// Replace the target text and start revealing it from nothing.
    ///
    /// Returns the id of the new session; ticks for any earlier id are
    /// rejected from now on.
    pub fn set_target(&mut self, text: impl Into<String>) -> SessionId {
        let id = self.session.id().next();
        self.session = TypingSession::new(id, text.into());
        id
    }

    /// Reveal one char of session `id`.
    pub fn tick(&mut self, id: SessionId) -> TickOutcome {
        if id != self.session.id() {
            return TickOutcome::Stale;
        }
        self.session.advance();
        if self.session.is_complete() {
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced
        }
    }

    /// Skip the animation and show the full target.
    pub fn reveal_all(&mut self) {
        self.session.reveal_all();
    }

    /// The revealed prefix of the target.
    pub fn current_output(&self) -> &str {
        self.session.output()
    }

    pub fn target_text(&self) -> &str {
        self.session.target()
    }

    pub fn revealed_length(&self) -> usize {
        self.session.revealed_length()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn session_id(&self) -> SessionId {
        self.session.id()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Flip the cursor. Independent of reveal progress.
    pub fn toggle_cursor(&mut self) -> bool {
        self.cursor_visible = !self.cursor_visible;
        self.cursor_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(typist: &mut ContentTypist, id: SessionId, n: usize) {
        for _ in 0..n {
            typist.tick(id);
        }
    }

    #[test]
    fn new_typist_is_empty_and_complete() {
        let typist = ContentTypist::new();
        assert_eq!(typist.current_output(), "");
        assert!(typist.is_complete());
        assert!(typist.cursor_visible());
    }

    #[test]
    fn three_ticks_show_three_chars() {
        let mut typist = ContentTypist::new();
        let id = typist.set_target("home text");
        ticked(&mut typist, id, 3);
        assert_eq!(typist.current_output(), "hom");
    }

    #[test]
    fn length_ticks_reveal_everything_and_no_further() {
        for text in ["", "a", "hello world", "line one\nline two", "→ héllo ▋"] {
            let mut typist = ContentTypist::new();
            let id = typist.set_target(text);
            ticked(&mut typist, id, text.chars().count());
            assert_eq!(typist.current_output(), text);
            assert_eq!(typist.tick(id), TickOutcome::Completed);
            assert_eq!(typist.current_output(), text);
            assert_eq!(typist.revealed_length(), text.chars().count());
        }
    }

    #[test]
    fn tick_outcomes() {
        let mut typist = ContentTypist::new();
        let id = typist.set_target("ab");
        assert_eq!(typist.tick(id), TickOutcome::Advanced);
        assert_eq!(typist.tick(id), TickOutcome::Completed);
        assert_eq!(typist.tick(id), TickOutcome::Completed);
    }

    #[test]
    fn set_target_resets_progress_immediately() {
        let mut typist = ContentTypist::new();
        let home = typist.set_target("home text");
        ticked(&mut typist, home, 5);
        assert_eq!(typist.revealed_length(), 5);

        let about = typist.set_target("about text");
        assert_ne!(home, about);
        assert_eq!(typist.revealed_length(), 0);
        assert_eq!(typist.current_output(), "");
    }

    #[test]
    fn stale_ticks_are_ignored() {
        let mut typist = ContentTypist::new();
        let home = typist.set_target("home text");
        ticked(&mut typist, home, 2);

        let about = typist.set_target("about text");
        assert_eq!(typist.tick(home), TickOutcome::Stale);
        assert_eq!(typist.tick(home), TickOutcome::Stale);
        assert_eq!(typist.current_output(), "");

        typist.tick(about);
        assert_eq!(typist.current_output(), "a");
    }

    #[test]
    fn tab_switch_never_mixes_outputs() {
        let home_text = "Welcome home";
        let about_text = "About me";
        let mut typist = ContentTypist::new();
        let home = typist.set_target(home_text);
        ticked(&mut typist, home, 4);
        let about = typist.set_target(about_text);

        // Interleave late home ticks with about ticks.
        for i in 0..about_text.len() {
            typist.tick(home);
            if i % 2 == 0 {
                typist.tick(about);
            }
            assert!(about_text.starts_with(typist.current_output()));
        }
    }

    #[test]
    fn session_ids_increase() {
        let mut typist = ContentTypist::new();
        let a = typist.set_target("a");
        let b = typist.set_target("a");
        assert!(b > a);
        assert_eq!(typist.session_id(), b);
    }

    #[test]
    fn reveal_all_skips_animation() {
        let mut typist = ContentTypist::new();
        let id = typist.set_target("skip me");
        typist.reveal_all();
        assert_eq!(typist.current_output(), "skip me");
        assert_eq!(typist.tick(id), TickOutcome::Completed);
    }

    #[test]
    fn cursor_blink_is_independent_of_reveal() {
        let mut typist = ContentTypist::new();
        let id = typist.set_target("abc");
        assert!(!typist.toggle_cursor());
        typist.tick(id);
        assert!(!typist.cursor_visible());
        typist.set_target("xyz");
        assert!(!typist.cursor_visible());
        assert!(typist.toggle_cursor());
    }
}
