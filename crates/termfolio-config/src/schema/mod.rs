//! Configuration schema types for Termfolio.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod colors;
mod startup;
mod system;
mod typing;
mod window;

pub use colors::*;
pub use startup::*;
pub use system::*;
pub use typing::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration. Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TermfolioConfig {
    pub window: WindowConfig,
    pub typing: TypingConfig,
    pub colors: ColorConfig,
    pub startup: StartupConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
