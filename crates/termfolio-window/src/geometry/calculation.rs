//! Frame placement and hit testing.

use termfolio_common::types::{Point, Rect};

use crate::controller::WindowState;

use super::types::{HitTarget, WindowControl, WindowGeometry, CONTROL_WIDTH, HEADER_HEIGHT};

impl WindowGeometry {
    /// The window frame inside `viewport`, or `None` when hidden.
    ///
    /// A restored window is centred and then shifted by its position. A
    /// minimized window keeps its title bar where the full window's would be.
    pub fn frame(&self, viewport: Rect, state: &WindowState) -> Option<Rect> {
        if !state.is_visible {
            return None;
        }

        if state.is_maximized {
            let height = if state.is_minimized {
                HEADER_HEIGHT.min(viewport.height)
            } else {
                viewport.height
            };
            return Some(Rect::new(viewport.x, viewport.y, viewport.width, height));
        }

        let width = self.width.min(viewport.width);
        let full_height = self.height.min(viewport.height);
        let x = viewport.x + i32::from((viewport.width - width) / 2) + state.position.x;
        let y = viewport.y + i32::from((viewport.height - full_height) / 2) + state.position.y;
        let height = if state.is_minimized {
            HEADER_HEIGHT.min(full_height)
        } else {
            full_height
        };
        Some(Rect::new(x, y, width, height))
    }

    /// The title bar row of a frame.
    pub fn header(frame: Rect) -> Rect {
        Rect::new(frame.x, frame.y, frame.width, HEADER_HEIGHT.min(frame.height))
    }

    /// Everything below the title bar.
    pub fn body(frame: Rect) -> Rect {
        let header = HEADER_HEIGHT.min(frame.height);
        Rect::new(
            frame.x,
            frame.y + i32::from(header),
            frame.width,
            frame.height - header,
        )
    }

    /// Button rectangles, right-aligned in the title bar with a one-cell
    /// gap between them and a one-cell right margin.
    pub fn controls(frame: Rect) -> [(WindowControl, Rect); 2] {
        let y = frame.y;
        let maximize_x = frame.right() - 1 - i32::from(CONTROL_WIDTH);
        let minimize_x = maximize_x - 1 - i32::from(CONTROL_WIDTH);
        [
            (
                WindowControl::Minimize,
                Rect::new(minimize_x, y, CONTROL_WIDTH, HEADER_HEIGHT),
            ),
            (
                WindowControl::Maximize,
                Rect::new(maximize_x, y, CONTROL_WIDTH, HEADER_HEIGHT),
            ),
        ]
    }

    /// Classify a point against a frame.
    pub fn hit_test(frame: Rect, point: Point) -> Option<HitTarget> {
        if !frame.contains(point) {
            return None;
        }
        if Self::header(frame).contains(point) {
            let control = Self::controls(frame)
                .into_iter()
                .find(|(_, rect)| rect.contains(point))
                .map(|(control, _)| control);
            return Some(match control {
                Some(control) => HitTarget::Control(control),
                None => HitTarget::Header,
            });
        }
        Some(HitTarget::Body)
    }
}
