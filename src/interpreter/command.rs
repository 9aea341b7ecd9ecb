//! The closed command vocabulary.

use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Commands the terminal accepts. Anything else is rejected before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Ls,
    Cd,
    Cat,
    Pwd,
    Clear,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Ls,
        Command::Cd,
        Command::Cat,
        Command::Pwd,
        Command::Clear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Ls => "ls",
            Command::Cd => "cd",
            Command::Cat => "cat",
            Command::Pwd => "pwd",
            Command::Clear => "clear",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or_else(|| CommandError::DisallowedCommand(name.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Split on runs of whitespace; `None` for a blank line.
    pub fn tokenize(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }
}
