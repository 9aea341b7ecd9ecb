//! Configuration
//!
//! Layered settings for a terminal instance: built-in defaults, the global
//! config file, an explicit `--config` file, then `DCIB__*` environment
//! variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use crate::session::SessionSettings;
use serde::{Deserialize, Serialize};

/// Complete configuration for the terminal binary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Prompt identity, home location and tree source
    #[serde(default)]
    pub terminal: SessionSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}
