//! Terminal input and timer events.

use crossterm::event::{Event as TerminalEvent, MouseButton, MouseEvent, MouseEventKind};
use termfolio_common::types::Point;
use termfolio_common::Event;
use termfolio_window::{HitTarget, PressOrigin, WindowCommand, WindowControl, WindowGeometry};

use super::actions::{action_for_key, Action};
use super::core::TermfolioApp;
use super::layout::BodyHit;

impl TermfolioApp {
    pub(super) fn handle_terminal_event(&mut self, event: TerminalEvent) {
        match event {
            TerminalEvent::Key(key) => {
                if let Some(action) = action_for_key(key) {
                    self.dispatch(action);
                }
            }
            TerminalEvent::Mouse(mouse) => self.handle_mouse(mouse),
            TerminalEvent::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
    }

    /// Feed a reveal tick or cursor blink to the typewriter.
    pub(super) fn handle_timer_event(&mut self, event: Event) {
        if self.typewriter.handle(event) {
            self.needs_redraw = true;
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pointer = Point::new(i32::from(mouse.column), i32::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(pointer),
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.window.drag_to(pointer) {
                    self.needs_redraw = true;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.window.is_dragging() {
                    self.window_command(WindowCommand::EndDrag);
                    tracing::debug!(position = ?self.window.position(), "Drag ended");
                }
            }
            _ => {}
        }
    }

    fn handle_press(&mut self, pointer: Point) {
        let layout = self.layout();

        // The dock is drawn above the window.
        if layout.dock.contains(pointer) {
            self.window_command(WindowCommand::ToggleVisible);
            return;
        }

        let Some(window) = layout.window else {
            return;
        };
        match WindowGeometry::hit_test(window.frame, pointer) {
            Some(HitTarget::Control(control)) => {
                self.window_command(match control {
                    WindowControl::Minimize => WindowCommand::Minimize,
                    WindowControl::Maximize => WindowCommand::Maximize,
                });
            }
            Some(HitTarget::Header) => {
                if self.window.start_drag(pointer, PressOrigin::Header) {
                    tracing::debug!(?pointer, "Drag started");
                    self.needs_redraw = true;
                }
            }
            Some(HitTarget::Body) => match window.hit_body(pointer) {
                Some(BodyHit::Tab(tab)) => self.select_tab(tab),
                Some(BodyHit::Post(post)) => self.open_post(post.id),
                Some(BodyHit::Back) => self.dispatch(Action::Back),
                None => {}
            },
            None => {}
        }
    }
}
