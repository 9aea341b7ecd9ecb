//! Session state and per-terminal settings.

use crate::tree::TreePath;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_user() -> String {
    "recruit".to_string()
}

fn default_host() -> String {
    "dcib".to_string()
}

fn default_home() -> TreePath {
    TreePath::from_segments(["home", "recruit"])
}

fn default_true() -> bool {
    true
}

/// Settings for one terminal instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// User name shown in the prompt
    #[serde(default = "default_user")]
    pub user: String,

    /// Host name shown in the prompt
    #[serde(default = "default_host")]
    pub host: String,

    /// Starting and reset location
    #[serde(default = "default_home")]
    pub home: TreePath,

    /// Tree manifest (.toml or .json); None uses the compiled-in tree
    #[serde(default)]
    pub tree_file: Option<PathBuf>,

    /// Colorize the prompt on interactive terminals
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            home: default_home(),
            tree_file: None,
            color: default_true(),
        }
    }
}

/// The single piece of mutable state behind a terminal.
///
/// `current` always names a directory of the tree the session was created
/// against; the interpreter is the only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    home: TreePath,
    current: TreePath,
}

impl Session {
    pub fn new(home: TreePath) -> Self {
        Self {
            current: home.clone(),
            home,
        }
    }

    pub fn home(&self) -> &TreePath {
        &self.home
    }

    pub fn current(&self) -> &TreePath {
        &self.current
    }

    /// Move to `path`, returning whether the location changed.
    pub(crate) fn change_to(&mut self, path: TreePath) -> bool {
        if self.current == path {
            return false;
        }
        self.current = path;
        true
    }

    pub(crate) fn reset(&mut self) -> bool {
        let home = self.home.clone();
        self.change_to(home)
    }

    /// Prompt form of the current location: `~`, `~/a/b`, or absolute.
    pub fn prompt_path(&self) -> String {
        match self.current.strip_prefix(&self.home) {
            Some([]) => "~".to_string(),
            Some(rest) => format!("~/{}", rest.join("/")),
            None => self.current.to_string(),
        }
    }
}
