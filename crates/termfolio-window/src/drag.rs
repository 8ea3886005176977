//! Drag gesture bookkeeping.

use termfolio_common::types::Point;

/// Where a pointer press landed on the window chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOrigin {
    /// The title bar outside any button.
    Header,
    /// A window button. Presses here never start a drag.
    Control,
}

/// Pointer-to-window offset captured when a drag starts.
///
/// Lives only as long as the gesture; the controller drops it on `end_drag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAnchor {
    pub start_x: i32,
    pub start_y: i32,
}

impl DragAnchor {
    /// Anchor a drag so that `position` stays under `pointer`.
    pub fn capture(pointer: Point, position: Point) -> Self {
        let offset = pointer - position;
        Self {
            start_x: offset.x,
            start_y: offset.y,
        }
    }

    /// Window position for a pointer at `pointer`.
    pub fn position_for(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.start_x, pointer.y - self.start_y)
    }
}
