use termfolio_common::SessionId;

/// One reveal of one target string.
///
/// Length is counted in chars. The byte offset of the revealed prefix is
/// cached so the output is an O(1) slice that never splits a code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSession {
    id: SessionId,
    target: String,
    total_chars: usize,
    revealed_chars: usize,
    revealed_bytes: usize,
}

impl TypingSession {
    pub fn new(id: SessionId, target: String) -> Self {
        let total_chars = target.chars().count();
        Self {
            id,
            target,
            total_chars,
            revealed_chars: 0,
            revealed_bytes: 0,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn revealed_length(&self) -> usize {
        self.revealed_chars
    }

    pub fn target_length(&self) -> usize {
        self.total_chars
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_chars == self.total_chars
    }

    /// The revealed prefix.
    pub fn output(&self) -> &str {
        &self.target[..self.revealed_bytes]
    }

    /// Reveal one more char. Returns `false` once everything is shown.
    pub fn advance(&mut self) -> bool {
        match self.target[self.revealed_bytes..].chars().next() {
            Some(c) => {
                self.revealed_bytes += c.len_utf8();
                self.revealed_chars += 1;
                true
            }
            None => false,
        }
    }

    /// Show the whole target at once.
    pub fn reveal_all(&mut self) {
        self.revealed_bytes = self.target.len();
        self.revealed_chars = self.total_chars;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(text: &str) -> TypingSession {
        TypingSession::new(SessionId::INITIAL.next(), text.to_string())
    }

    #[test]
    fn starts_empty() {
        let s = session("abc");
        assert_eq!(s.output(), "");
        assert_eq!(s.revealed_length(), 0);
        assert_eq!(s.target_length(), 3);
        assert!(!s.is_complete());
    }

    #[test]
    fn advance_reveals_one_char() {
        let mut s = session("abc");
        assert!(s.advance());
        assert_eq!(s.output(), "a");
        assert!(s.advance());
        assert!(s.advance());
        assert_eq!(s.output(), "abc");
        assert!(s.is_complete());
        assert!(!s.advance());
        assert_eq!(s.output(), "abc");
    }

    #[test]
    fn multibyte_chars_are_never_split() {
        let mut s = session("→ é▋");
        let mut seen = Vec::new();
        while s.advance() {
            seen.push(s.output().to_string());
        }
        assert_eq!(seen, vec!["→", "→ ", "→ é", "→ é▋"]);
        assert_eq!(s.revealed_length(), 4);
    }

    #[test]
    fn empty_target_is_complete() {
        let mut s = session("");
        assert!(s.is_complete());
        assert!(!s.advance());
    }

    #[test]
    fn reveal_all_completes() {
        let mut s = session("hello");
        s.advance();
        s.reveal_all();
        assert!(s.is_complete());
        assert_eq!(s.output(), "hello");
    }
}
