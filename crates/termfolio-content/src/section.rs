use crate::blog::BlogPost;
use crate::image::{ImageSpec, PROFILE_IMAGE};
use crate::tab::Tab;

/// What the content area shows. The blog case carries the open post, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Blog(Option<&'static BlogPost>),
    Contact,
}

impl Section {
    pub fn tab(&self) -> Tab {
        match self {
            Section::Home => Tab::Home,
            Section::About => Tab::About,
            Section::Projects => Tab::Projects,
            Section::Blog(_) => Tab::Blog,
            Section::Contact => Tab::Contact,
        }
    }

    /// Image drawn above the text, if the section has one.
    pub fn image(&self) -> Option<ImageSpec> {
        match self {
            Section::About => Some(PROFILE_IMAGE),
            _ => None,
        }
    }
}

impl From<Tab> for Section {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Home => Section::Home,
            Tab::About => Section::About,
            Tab::Projects => Section::Projects,
            Tab::Blog => Section::Blog(None),
            Tab::Contact => Section::Contact,
        }
    }
}
