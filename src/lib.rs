//! DCIB Terminal: a read-only virtual filesystem shell
//!
//! A small command interpreter (`ls`, `cd`, `cat`, `pwd`, `clear`) over an
//! immutable in-memory tree. The core is [`interpreter::CommandInterpreter`],
//! a pure function of (tree, current location, input line) to output lines
//! and a new location.

pub mod banner;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod session;
pub mod tooling;
pub mod tree;

pub use error::{CommandError, ManifestError, TerminalError, TreeError};
pub use interpreter::{Command, CommandInterpreter, Evaluation};
pub use session::{Session, SessionSettings};
pub use tree::{Directory, File, Node, TreePath, VirtualFileTree};
