//! Defaults every layered build starts from.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// Builder seeded with the keys environment overrides are most likely to
/// target, so `try_parsing` has a typed value to replace.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("terminal.user", "recruit")?
        .set_default("terminal.host", "dcib")?
        .set_default("terminal.home", "/home/recruit")?
        .set_default("terminal.color", true)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "file")
}
