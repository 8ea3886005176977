use crate::id::SessionId;

/// Messages delivered to the single owner of the window and typist state.
///
/// Timer tasks never mutate state directly; they only send these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One reveal step for the given typing session.
    RevealTick(SessionId),
    /// Flip cursor visibility.
    CursorBlink,
    Shutdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_ticks_compare_by_session() {
        let first = SessionId::INITIAL.next();
        let second = first.next();
        assert_eq!(Event::RevealTick(first), Event::RevealTick(first));
        assert_ne!(Event::RevealTick(first), Event::RevealTick(second));
        assert_ne!(Event::CursorBlink, Event::Shutdown);
    }
}
