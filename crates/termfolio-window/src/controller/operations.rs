//! Drag, minimize, maximize, and visibility transitions.

use termfolio_common::types::Point;

use crate::drag::{DragAnchor, PressOrigin};

use super::WindowController;

impl WindowController {
    /// Begin a drag from a press at `pointer`. Returns `true` if a drag started.
    ///
    /// Presses on window buttons are ignored. A maximized window is restored
    /// first and anchored under the pointer, so it detaches instead of jumping.
    pub fn start_drag(&mut self, pointer: Point, origin: PressOrigin) -> bool {
        if origin == PressOrigin::Control || !self.state.is_visible {
            return false;
        }

        if self.state.is_maximized {
            self.state.is_maximized = false;
            // Maximized implies origin; restore from there.
            self.state.position = Point::ORIGIN;
        }

        self.anchor = Some(DragAnchor::capture(pointer, self.state.position));
        self.state.is_dragging = true;
        true
    }

    /// Move the window to follow the pointer. No-op unless a drag is open.
    /// Returns `true` if the position changed.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };
        let next = anchor.position_for(pointer);
        if next == self.state.position {
            return false;
        }
        self.state.position = next;
        true
    }

    /// Close the drag gesture. Always leaves `is_dragging == false`.
    pub fn end_drag(&mut self) {
        self.anchor = None;
        self.state.is_dragging = false;
    }

    /// Collapse to the title bar or expand again.
    pub fn toggle_minimize(&mut self) {
        self.state.is_minimized = !self.state.is_minimized;
    }

    /// Enter or leave maximized mode. Entering resets the position to the
    /// origin and closes any open drag; leaving keeps the position.
    pub fn toggle_maximize(&mut self) {
        self.state.is_maximized = !self.state.is_maximized;
        if self.state.is_maximized {
            self.end_drag();
            self.state.position = Point::ORIGIN;
        }
    }

    /// Dock toggle. Wakes a minimized window instead of hiding it.
    pub fn toggle_visible(&mut self) {
        if self.state.is_minimized {
            self.state.is_minimized = false;
            return;
        }
        self.state.is_visible = !self.state.is_visible;
        if !self.state.is_visible {
            self.end_drag();
        }
    }
}
