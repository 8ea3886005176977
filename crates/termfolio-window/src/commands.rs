use crate::controller::WindowController;

/// Button and keyboard driven window transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Minimize,
    Maximize,
    ToggleVisible,
    EndDrag,
}

impl WindowController {
    pub fn apply(&mut self, command: WindowCommand) {
        match command {
            WindowCommand::Minimize => self.toggle_minimize(),
            WindowCommand::Maximize => self.toggle_maximize(),
            WindowCommand::ToggleVisible => self.toggle_visible(),
            WindowCommand::EndDrag => self.end_drag(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_dispatches_each_command() {
        let mut ctl = WindowController::new();

        ctl.apply(WindowCommand::Minimize);
        assert!(ctl.state().is_minimized);

        ctl.apply(WindowCommand::ToggleVisible);
        assert!(!ctl.state().is_minimized);
        assert!(ctl.state().is_visible);

        ctl.apply(WindowCommand::Maximize);
        assert!(ctl.state().is_maximized);

        ctl.apply(WindowCommand::ToggleVisible);
        assert!(!ctl.state().is_visible);

        ctl.apply(WindowCommand::EndDrag);
        assert!(!ctl.state().is_dragging);
    }
}
