//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::TerminalConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment, plus
    /// `explicit` when given.
    pub fn load(explicit: Option<&Path>) -> Result<TerminalConfig, ConfigError> {
        MergeService::load(explicit)
    }

    /// Load configuration from a specific file, skipping the global file.
    pub fn load_from_file(path: &Path) -> Result<TerminalConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> TerminalConfig {
        TerminalConfig::default()
    }
}
