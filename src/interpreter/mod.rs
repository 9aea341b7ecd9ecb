//! Command Interpreter
//!
//! Maps one raw input line plus the session's current location to output
//! lines and, for a successful `cd`, a new location. Every failure is
//! reported as a single output line; none escapes `evaluate` and none moves
//! the session.

pub mod command;
pub mod result;

pub use command::{Command, Invocation};
pub use result::Evaluation;

use crate::banner::BANNER;
use crate::error::{CommandError, TerminalError};
use crate::session::{Session, SessionSettings};
use crate::tree::{Node, TreePath, VirtualFileTree};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Lines produced by a handler, or the single failure it reports.
type HandlerOutput = Result<Vec<String>, CommandError>;

/// Interpreter for one terminal session.
pub struct CommandInterpreter {
    tree: Arc<VirtualFileTree>,
    session: Session,
    user: String,
    host: String,
}

impl CommandInterpreter {
    /// Create a session at the configured home.
    ///
    /// Fails when the home is not a directory of `tree`, so the session
    /// starts out valid.
    pub fn new(tree: Arc<VirtualFileTree>, settings: &SessionSettings) -> Result<Self, TerminalError> {
        if !tree.is_directory(&settings.home) {
            return Err(TerminalError::InvalidHome(settings.home.clone()));
        }
        Ok(Self {
            tree,
            session: Session::new(settings.home.clone()),
            user: settings.user.clone(),
            host: settings.host.clone(),
        })
    }

    /// Interpreter over the compiled-in tree with default settings.
    pub fn with_defaults() -> Result<Self, TerminalError> {
        Self::new(Arc::new(VirtualFileTree::default()), &SessionSettings::default())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tree(&self) -> &VirtualFileTree {
        &self.tree
    }

    /// `user@host:<location>$`
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", self.user, self.host, self.session.prompt_path())
    }

    /// Banner followed by the bare prompt.
    pub fn startup_lines(&self) -> Vec<String> {
        BANNER
            .iter()
            .map(|line| line.to_string())
            .chain(std::iter::once(self.prompt()))
            .collect()
    }

    /// Evaluate one line of input.
    pub fn evaluate(&mut self, raw_line: &str) -> Evaluation {
        let line = raw_line.trim();
        let mut evaluation = Evaluation {
            echoed_prompt: format!("{} {}", self.prompt(), line),
            ..Evaluation::default()
        };

        let Some(invocation) = Invocation::tokenize(line) else {
            return evaluation;
        };

        let before = self.session.current().clone();
        let outcome = invocation
            .name
            .parse::<Command>()
            .and_then(|command| {
                evaluation.clear_screen = command == Command::Clear;
                self.dispatch(command, &invocation.args)
            });

        match outcome {
            Ok(lines) => {
                debug!(command = invocation.name, lines = lines.len(), "command succeeded");
                evaluation.output_lines = lines;
            }
            Err(err) => {
                debug!(command = invocation.name, error = %err, "command failed");
                evaluation.output_lines = vec![err.to_string()];
            }
        }

        evaluation.session_mutated = *self.session.current() != before;
        if evaluation.session_mutated {
            info!(from = %before, to = %self.session.current(), "changed directory");
        }
        evaluation
    }

    fn dispatch(&mut self, command: Command, args: &[&str]) -> HandlerOutput {
        match command {
            Command::Ls => self.ls(args),
            Command::Cd => self.cd(args.first().copied()),
            Command::Cat => self.cat(args.first().copied()),
            Command::Pwd => Ok(vec![self.session.current().to_string()]),
            Command::Clear => Ok(Vec::new()),
        }
    }

    fn resolve(&self, raw: &str) -> TreePath {
        TreePath::resolve(raw, self.session.current(), self.session.home())
    }

    fn ls(&self, args: &[&str]) -> HandlerOutput {
        if let Some(option) = args.iter().find(|arg| **arg != "-a") {
            return Err(CommandError::UnsupportedOption {
                command: Command::Ls.name().to_string(),
                option: option.to_string(),
            });
        }
        let show_hidden = !args.is_empty();

        let dir = match self.tree.directory(self.session.current()) {
            Ok(dir) => dir,
            Err(err) => {
                error!(error = %err, "session location is not a directory");
                return Ok(vec![String::new()]);
            }
        };
        let names: Vec<&str> = if show_hidden {
            dir.names().collect()
        } else {
            dir.visible_names().collect()
        };
        Ok(vec![names.join("  ")])
    }

    fn cd(&mut self, target: Option<&str>) -> HandlerOutput {
        let target = match target {
            None | Some("") | Some("~") => {
                self.session.reset();
                return Ok(Vec::new());
            }
            Some(target) => target,
        };

        let resolved = self.resolve(target);
        match self.tree.lookup(&resolved) {
            Ok(Node::Directory(_)) => {
                self.session.change_to(resolved);
                Ok(Vec::new())
            }
            Ok(Node::File(_)) => Err(CommandError::NotADirectory(target.to_string())),
            Err(_) => Err(CommandError::PathNotFound(target.to_string())),
        }
    }

    fn cat(&self, target: Option<&str>) -> HandlerOutput {
        let Some(target) = target else {
            return Err(CommandError::MissingOperand(Command::Cat.name().to_string()));
        };

        match self.tree.lookup(&self.resolve(target)) {
            Ok(Node::File(file)) => Ok(vec![file.content.clone()]),
            Ok(Node::Directory(_)) => Err(CommandError::NotAFile(target.to_string())),
            Err(_) => Err(CommandError::FileNotFound(target.to_string())),
        }
    }
}
