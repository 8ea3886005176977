//! Screen and window layout, shared by rendering and hit testing.

use ratatui::layout::{Position, Rect as Area};
use termfolio_common::types::{Point, Rect};
use termfolio_content::{BlogPost, Navigation, Tab, BLOG_POSTS};
use termfolio_window::geometry::HEADER_HEIGHT;
use termfolio_window::{WindowGeometry, WindowState};

use super::types::{BACK_LABEL, DOCK_HEIGHT, DOCK_WIDTH, IMAGE_HEIGHT, TAB_GAP};

/// Where everything sits on screen for one frame.
#[derive(Debug, Clone)]
pub(super) struct ScreenLayout {
    pub dock: Rect,
    /// `None` while the window is hidden.
    pub window: Option<WindowLayout>,
}

/// Parts of the window. `frame` is in screen cells; every other rect is
/// relative to the frame's top-left corner.
#[derive(Debug, Clone)]
pub(super) struct WindowLayout {
    /// May extend past the screen edges after a drag.
    pub frame: Rect,
    pub tab_strip: Area,
    pub tabs: Vec<(Tab, Area)>,
    pub image: Option<Area>,
    pub text: Area,
    pub links: Vec<(&'static BlogPost, Area)>,
    pub back: Option<Area>,
}

/// A clickable element inside the window body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BodyHit {
    Tab(Tab),
    Post(&'static BlogPost),
    Back,
}

impl ScreenLayout {
    pub fn compute(
        screen: Rect,
        geometry: &WindowGeometry,
        state: &WindowState,
        navigation: &Navigation,
    ) -> Self {
        let dock_height = DOCK_HEIGHT.min(screen.height);
        let dock_width = DOCK_WIDTH.min(screen.width);
        // The window is placed in everything above the dock.
        let viewport = Rect::new(
            screen.x,
            screen.y,
            screen.width,
            screen.height - dock_height,
        );
        let dock = Rect::new(
            screen.x + i32::from((screen.width - dock_width) / 2),
            viewport.bottom(),
            dock_width,
            dock_height,
        );
        let window = geometry
            .frame(viewport, state)
            .map(|frame| WindowLayout::compute(frame, state.is_minimized, navigation));
        Self { dock, window }
    }
}

impl WindowLayout {
    pub fn compute(frame: Rect, minimized: bool, navigation: &Navigation) -> Self {
        let mut layout = Self {
            frame,
            tab_strip: Area::default(),
            tabs: Vec::new(),
            image: None,
            text: Area::default(),
            links: Vec::new(),
            back: None,
        };
        if minimized {
            return layout;
        }

        // Inside the left, right and bottom borders.
        let inner = Area::new(
            1,
            HEADER_HEIGHT,
            frame.width.saturating_sub(2),
            frame.height.saturating_sub(HEADER_HEIGHT + 1),
        );
        if inner.is_empty() {
            return layout;
        }

        layout.tab_strip = Area::new(inner.x, inner.y, inner.width, 1);
        let mut x = inner.x + 1;
        for tab in Tab::ALL {
            let width = tab_label_width(tab);
            if x + width > inner.right() {
                break;
            }
            layout.tabs.push((tab, Area::new(x, inner.y, width, 1)));
            x += width + TAB_GAP;
        }

        // One blank row under the tabs, one column of padding per side.
        let mut content = Area::new(
            inner.x + 1,
            inner.y + 2,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(2),
        );

        if let Some(image) = navigation.section().image() {
            let height = IMAGE_HEIGHT.min(content.height);
            let width = (char_width(&image.caption()) + 4).min(content.width);
            layout.image = Some(Area::new(content.x, content.y, width, height));
            let used = (height + 1).min(content.height);
            content.y += used;
            content.height -= used;
        }

        if navigation.shows_post_links() {
            let rows = (BLOG_POSTS.len() as u16).min(content.height);
            let top = content.bottom() - rows;
            for (row, post) in (0..rows).zip(BLOG_POSTS.iter()) {
                let width = char_width(&post.link_label()).min(content.width);
                layout
                    .links
                    .push((post, Area::new(content.x, top + row, width, 1)));
            }
            content.height -= (rows + 1).min(content.height);
        } else if navigation.shows_back_button() && content.height > 0 {
            let width = char_width(BACK_LABEL).min(content.width);
            layout.back = Some(Area::new(content.x, content.bottom() - 1, width, 1));
            content.height -= 2.min(content.height);
        }

        layout.text = content;
        layout
    }

    /// Classify a screen point against the body's clickable parts.
    pub fn hit_body(&self, pointer: Point) -> Option<BodyHit> {
        let local = pointer - Point::new(self.frame.x, self.frame.y);
        let (Ok(x), Ok(y)) = (u16::try_from(local.x), u16::try_from(local.y)) else {
            return None;
        };
        let position = Position::new(x, y);

        if let Some((tab, _)) = self.tabs.iter().find(|(_, area)| area.contains(position)) {
            return Some(BodyHit::Tab(*tab));
        }
        if let Some((post, _)) = self.links.iter().find(|(_, area)| area.contains(position)) {
            return Some(BodyHit::Post(*post));
        }
        match self.back {
            Some(area) if area.contains(position) => Some(BodyHit::Back),
            _ => None,
        }
    }
}

/// Tab labels are drawn padded with one space on each side.
pub(super) fn tab_label(tab: Tab) -> String {
    format!(" {} ", tab.name())
}

fn tab_label_width(tab: Tab) -> u16 {
    tab.name().len() as u16 + 2
}

fn char_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}
