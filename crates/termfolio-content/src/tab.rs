use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of content tabs, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    About,
    Projects,
    Blog,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::About, Tab::Projects, Tab::Blog, Tab::Contact];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::About => "about",
            Tab::Projects => "projects",
            Tab::Blog => "blog",
            Tab::Contact => "contact",
        }
    }

    /// Exact, case-sensitive lookup by tab name.
    pub fn from_name(name: &str) -> Option<Tab> {
        Self::ALL.into_iter().find(|tab| tab.name() == name)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// The tab to the right, wrapping around.
    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
