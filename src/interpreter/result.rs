//! Result of evaluating one input line.

use serde::{Deserialize, Serialize};

/// What the presentation layer should do after one line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Prompt plus the submitted line, rendered before any output
    pub echoed_prompt: String,
    /// Lines produced by the command, excluding the echo
    pub output_lines: Vec<String>,
    /// True when the current location changed
    pub session_mutated: bool,
    /// Discard prior output and re-render the startup screen
    pub clear_screen: bool,
}

impl Evaluation {
    /// Echo followed by the output lines, in display order.
    pub fn transcript(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.echoed_prompt.as_str())
            .chain(self.output_lines.iter().map(String::as_str))
    }
}
