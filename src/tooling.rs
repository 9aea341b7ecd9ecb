//! Tooling & Integration Layer
//!
//! The presentation side of the terminal: CLI parsing, the session loop and
//! console rendering. The interpreter core never depends on this module.

pub mod cli;
pub mod console;

pub use cli::{Cli, CliContext, Commands};
pub use console::{Console, EchoMode};
