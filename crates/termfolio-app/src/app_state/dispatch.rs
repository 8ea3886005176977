//! Action dispatch: routes resolved actions to the window, navigation, or
//! typewriter.

use termfolio_content::{Tab, BLOG_POSTS};
use termfolio_window::WindowCommand;

use super::actions::Action;
use super::core::TermfolioApp;

impl TermfolioApp {
    /// Dispatch a resolved [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::NextTab => self.select_tab(self.navigation.active_tab().next()),
            Action::PrevTab => self.select_tab(self.navigation.active_tab().prev()),
            Action::Window(command) => self.window_command(command),
            Action::LinkUp => {
                if self.navigation.shows_post_links() && self.link_cursor > 0 {
                    self.link_cursor -= 1;
                    self.needs_redraw = true;
                }
            }
            Action::LinkDown => {
                if self.navigation.shows_post_links() && self.link_cursor + 1 < BLOG_POSTS.len() {
                    self.link_cursor += 1;
                    self.needs_redraw = true;
                }
            }
            Action::OpenLink => {
                if !self.navigation.shows_post_links() {
                    return;
                }
                if let Some(post) = BLOG_POSTS.get(self.link_cursor) {
                    self.open_post(post.id);
                }
            }
            Action::Back => {
                if self.navigation.back() {
                    self.refresh_content();
                }
            }
            Action::SkipTyping => {
                if !self.typewriter.typist().is_complete() {
                    self.typewriter.skip();
                    self.needs_redraw = true;
                }
            }
        }
    }

    pub(super) fn select_tab(&mut self, tab: Tab) {
        if self.navigation.select_tab(tab) {
            self.link_cursor = 0;
            self.refresh_content();
        }
    }

    /// Toggle a post on the blog listing, keeping the keyboard highlight on it.
    pub(super) fn open_post(&mut self, id: &str) {
        if !self.navigation.click_post(id) {
            return;
        }
        if let Some(index) = BLOG_POSTS.iter().position(|post| post.id == id) {
            self.link_cursor = index;
        }
        self.refresh_content();
    }

    pub(super) fn window_command(&mut self, command: WindowCommand) {
        let before = self.window.state();
        self.window.apply(command);
        let after = self.window.state();
        if after != before {
            tracing::debug!(?command, ?after, "Window state changed");
            self.needs_redraw = true;
        }
    }
}
