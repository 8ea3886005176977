//! Window placement inside a viewport and title bar hit testing.

mod calculation;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::WindowState;
    use termfolio_common::types::{Point, Rect};

    fn viewport() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    fn geometry() -> WindowGeometry {
        WindowGeometry::new(80, 24)
    }

    #[test]
    fn restored_window_is_centred() {
        let frame = geometry()
            .frame(viewport(), &WindowState::default())
            .unwrap();
        assert_eq!(frame, Rect::new(20, 8, 80, 24));
    }

    #[test]
    fn position_offsets_frame() {
        let state = WindowState {
            position: Point::new(-25, 3),
            ..WindowState::default()
        };
        let frame = geometry().frame(viewport(), &state).unwrap();
        assert_eq!(frame, Rect::new(-5, 11, 80, 24));
    }

    #[test]
    fn maximized_fills_viewport() {
        let state = WindowState {
            is_maximized: true,
            ..WindowState::default()
        };
        let vp = Rect::new(0, 0, 100, 30);
        assert_eq!(geometry().frame(vp, &state), Some(vp));
    }

    #[test]
    fn minimized_keeps_header_in_place() {
        let state = WindowState {
            is_minimized: true,
            ..WindowState::default()
        };
        let frame = geometry().frame(viewport(), &state).unwrap();
        assert_eq!(frame, Rect::new(20, 8, 80, HEADER_HEIGHT));
    }

    #[test]
    fn minimized_and_maximized_is_top_bar() {
        let state = WindowState {
            is_minimized: true,
            is_maximized: true,
            ..WindowState::default()
        };
        let frame = geometry().frame(viewport(), &state).unwrap();
        assert_eq!(frame, Rect::new(0, 0, 120, HEADER_HEIGHT));
    }

    #[test]
    fn hidden_has_no_frame() {
        let state = WindowState {
            is_visible: false,
            ..WindowState::default()
        };
        assert!(geometry().frame(viewport(), &state).is_none());
    }

    #[test]
    fn frame_clamps_to_small_viewport() {
        let vp = Rect::new(0, 0, 60, 20);
        let frame = geometry().frame(vp, &WindowState::default()).unwrap();
        assert_eq!(frame, Rect::new(0, 0, 60, 20));
    }

    #[test]
    fn new_enforces_minimum_size() {
        let g = WindowGeometry::new(1, 1);
        assert_eq!(g.width, CONTROL_WIDTH * 3);
        assert_eq!(g.height, HEADER_HEIGHT + 1);
    }

    #[test]
    fn header_and_body_split_frame() {
        let frame = Rect::new(10, 5, 40, 12);
        assert_eq!(WindowGeometry::header(frame), Rect::new(10, 5, 40, 1));
        assert_eq!(WindowGeometry::body(frame), Rect::new(10, 6, 40, 11));
    }

    #[test]
    fn controls_are_right_aligned() {
        let frame = Rect::new(0, 0, 40, 10);
        let [(min, min_rect), (max, max_rect)] = WindowGeometry::controls(frame);
        assert_eq!(min, WindowControl::Minimize);
        assert_eq!(max, WindowControl::Maximize);
        assert_eq!(max_rect, Rect::new(36, 0, 3, 1));
        assert_eq!(min_rect, Rect::new(32, 0, 3, 1));
    }

    #[test]
    fn hit_test_classifies_points() {
        let frame = Rect::new(0, 0, 40, 10);
        assert_eq!(
            WindowGeometry::hit_test(frame, Point::new(33, 0)),
            Some(HitTarget::Control(WindowControl::Minimize))
        );
        assert_eq!(
            WindowGeometry::hit_test(frame, Point::new(38, 0)),
            Some(HitTarget::Control(WindowControl::Maximize))
        );
        assert_eq!(
            WindowGeometry::hit_test(frame, Point::new(35, 0)),
            Some(HitTarget::Header)
        );
        assert_eq!(
            WindowGeometry::hit_test(frame, Point::new(5, 0)),
            Some(HitTarget::Header)
        );
        assert_eq!(
            WindowGeometry::hit_test(frame, Point::new(5, 4)),
            Some(HitTarget::Body)
        );
        assert_eq!(WindowGeometry::hit_test(frame, Point::new(40, 0)), None);
    }

    #[test]
    fn glyphs_fit_control_width() {
        for control in WindowControl::ALL {
            assert_eq!(control.glyph().len(), CONTROL_WIDTH as usize);
        }
    }
}
