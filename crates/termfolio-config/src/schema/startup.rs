//! Startup configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Tab opened at launch: home, about, projects, blog, or contact.
    pub tab: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self { tab: "home".into() }
    }
}
