//! Error types for the terminal.
//!
//! `CommandError` is the taxonomy of user-facing command failures; its
//! `Display` output is exactly the line shown in the transcript. The other
//! enums cover startup concerns (configuration, tree manifests, logging).

use crate::tree::TreePath;
use thiserror::Error;

/// Failure of a single typed command. Never fatal, never mutates the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command not allowed: {0}")]
    DisallowedCommand(String),

    #[error("{command}: unsupported option: {option}")]
    UnsupportedOption { command: String, option: String },

    #[error("{0}: missing file operand")]
    MissingOperand(String),

    #[error("cd: no such directory: {0}")]
    PathNotFound(String),

    #[error("cd: no such directory: {0}")]
    NotADirectory(String),

    #[error("cat: {0}: No such file")]
    FileNotFound(String),

    #[error("cat: {0}: No such file")]
    NotAFile(String),
}

/// Tree lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Not found: {0}")]
    NotFound(TreePath),

    #[error("Not a directory: {0}")]
    NotADirectory(TreePath),

    #[error("Not a file: {0}")]
    NotAFile(TreePath),
}

/// Errors raised while turning a manifest into a tree.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported manifest extension: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("Invalid entry name {name:?} under {parent}")]
    InvalidName { parent: TreePath, name: String },

    #[error("Duplicate entry {name:?} under {parent}")]
    DuplicateEntry { parent: TreePath, name: String },
}

/// Top-level error for building and running a terminal.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Home path {0} is not a directory in the file tree")]
    InvalidHome(TreePath),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
