//! Console presentation
//!
//! Writes evaluations to a byte stream the way the terminal panel shows
//! them. File bodies are written verbatim, embedded newlines included.

use crate::banner::BANNER;
use crate::interpreter::{CommandInterpreter, Evaluation};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// ANSI: clear screen and move the cursor home.
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// How the echo line is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoMode {
    /// Interactive: the user's own typing already shows the input line.
    Interactive,
    /// Transcript: every evaluation starts with its echoed prompt line.
    Transcript,
}

/// Renders terminal output to a writer.
pub struct Console<W: Write> {
    writer: W,
    color: bool,
    mode: EchoMode,
}

impl<W: Write> Console<W> {
    pub fn new(writer: W, color: bool, mode: EchoMode) -> Self {
        Self {
            writer,
            color,
            mode,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Banner for interactive use, or banner plus prompt for transcripts.
    pub fn render_startup(&mut self, interpreter: &CommandInterpreter) -> io::Result<()> {
        match self.mode {
            EchoMode::Interactive => {
                for line in BANNER {
                    writeln!(self.writer, "{}", line)?;
                }
            }
            EchoMode::Transcript => {
                for line in interpreter.startup_lines() {
                    writeln!(self.writer, "{}", line)?;
                }
            }
        }
        self.writer.flush()
    }

    /// Show the prompt and wait on the same line for input.
    pub fn render_prompt(&mut self, prompt: &str) -> io::Result<()> {
        if self.color {
            write!(self.writer, "{} ", prompt.green().bold())?;
        } else {
            write!(self.writer, "{} ", prompt)?;
        }
        self.writer.flush()
    }

    pub fn render(
        &mut self,
        evaluation: &Evaluation,
        interpreter: &CommandInterpreter,
    ) -> io::Result<()> {
        if evaluation.clear_screen {
            if self.mode == EchoMode::Interactive {
                write!(self.writer, "{}", CLEAR_SEQUENCE)?;
            }
            return self.render_startup(interpreter);
        }

        match self.mode {
            EchoMode::Transcript => {
                for line in evaluation.transcript() {
                    writeln!(self.writer, "{}", line)?;
                }
            }
            EchoMode::Interactive => {
                for line in &evaluation.output_lines {
                    writeln!(self.writer, "{}", line)?;
                }
            }
        }
        self.writer.flush()
    }
}
