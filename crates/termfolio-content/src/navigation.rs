//! Active tab and blog post selection.

use crate::blog::{find_post, BlogPost};
use crate::section::Section;
use crate::tab::Tab;

/// Which tab is open and, on the blog tab, which post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    active_tab: Tab,
    selected_post: Option<&'static BlogPost>,
}

impl Navigation {
    pub fn new(tab: Tab) -> Self {
        Self {
            active_tab: tab,
            selected_post: None,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn selected_post(&self) -> Option<&'static BlogPost> {
        self.selected_post
    }

    /// Open a tab. Always clears the post selection. Returns `true` if the
    /// rendered section changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        let before = self.section();
        self.active_tab = tab;
        self.selected_post = None;
        self.section() != before
    }

    /// Click on a post link. Only acts on the blog tab; clicking the open
    /// post closes it. Returns `true` if the rendered section changed.
    pub fn click_post(&mut self, id: &str) -> bool {
        if self.active_tab != Tab::Blog {
            return false;
        }
        let Some(post) = find_post(id) else {
            return false;
        };
        self.selected_post = match self.selected_post {
            Some(open) if open.id == post.id => None,
            _ => Some(post),
        };
        true
    }

    /// Return to the blog listing. Returns `true` if a post was open.
    pub fn back(&mut self) -> bool {
        self.selected_post.take().is_some()
    }

    pub fn section(&self) -> Section {
        match self.active_tab {
            Tab::Blog => Section::Blog(self.selected_post),
            tab => Section::from(tab),
        }
    }

    /// Whether post links are shown under the text.
    pub fn shows_post_links(&self) -> bool {
        self.active_tab == Tab::Blog && self.selected_post.is_none()
    }

    /// Whether the back button is shown under the text.
    pub fn shows_back_button(&self) -> bool {
        self.active_tab == Tab::Blog && self.selected_post.is_some()
    }
}
