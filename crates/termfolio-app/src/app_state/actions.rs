//! Keyboard shortcuts resolved to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termfolio_content::Tab;
use termfolio_window::WindowCommand;

/// Every user-triggerable action reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    Quit,
    SelectTab(Tab),
    NextTab,
    PrevTab,
    Window(WindowCommand),
    /// Move the highlighted post link on the blog listing.
    LinkUp,
    LinkDown,
    /// Open the highlighted post link.
    OpenLink,
    /// Close the open blog post.
    Back,
    /// Show the rest of the typed text at once.
    SkipTyping,
}

/// Map a key press to an action. Key releases and repeats map to nothing.
pub(super) fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Action::NextTab,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Action::PrevTab,
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Action::SelectTab(Tab::ALL[index])
        }
        KeyCode::Char('m') => Action::Window(WindowCommand::Minimize),
        KeyCode::Char('x') => Action::Window(WindowCommand::Maximize),
        KeyCode::Char('d') => Action::Window(WindowCommand::ToggleVisible),
        KeyCode::Up | KeyCode::Char('k') => Action::LinkUp,
        KeyCode::Down | KeyCode::Char('j') => Action::LinkDown,
        KeyCode::Enter => Action::OpenLink,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Action::Back,
        KeyCode::Char(' ') | KeyCode::Char('s') => Action::SkipTyping,
        _ => return None,
    };
    Some(action)
}
