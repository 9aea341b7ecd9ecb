//! CLI Tooling
//!
//! Command-line surface for the terminal: an interactive shell on stdin, a
//! batch `exec` mode producing transcripts or JSON, and `banner`.

use crate::banner::BANNER;
use crate::config::{ConfigLoader, TerminalConfig};
use crate::error::TerminalError;
use crate::interpreter::{CommandInterpreter, Evaluation};
use crate::tooling::console::{Console, EchoMode};
use crate::tree::{TreePath, VirtualFileTree};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// DCIB Terminal - read-only virtual filesystem shell
#[derive(Parser)]
#[command(name = "dcib-terminal")]
#[command(about = "Recruitment screening terminal over a read-only virtual filesystem")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (layered over the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tree manifest (.toml or .json) replacing the built-in tree
    #[arg(long)]
    pub tree: Option<PathBuf>,

    /// Home directory inside the tree (absolute, e.g. /home/recruit)
    #[arg(long)]
    pub home: Option<String>,

    /// Disable the colored prompt
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging (debug level)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive session on stdin (default)
    Shell,
    /// Evaluate lines non-interactively and print the transcript
    Exec {
        /// Lines to evaluate, one command per argument
        lines: Vec<String>,
        /// Read lines from a script file instead (stdin when neither is given)
        #[arg(long, conflicts_with = "lines")]
        script: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the startup banner
    Banner,
}

impl Cli {
    /// Load layered configuration and apply command-line overrides.
    pub fn load_config(&self) -> Result<TerminalConfig, TerminalError> {
        let mut config = ConfigLoader::load(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Command-line flags take precedence over every config source.
    pub fn apply_overrides(&self, config: &mut TerminalConfig) {
        if let Some(tree) = &self.tree {
            config.terminal.tree_file = Some(tree.clone());
        }
        if let Some(home) = &self.home {
            config.terminal.home = TreePath::parse_absolute(home);
        }
        if self.no_color {
            config.terminal.color = false;
            config.logging.color = false;
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}

/// CLI context owning one terminal session
pub struct CliContext {
    interpreter: CommandInterpreter,
    color: bool,
}

impl CliContext {
    /// Build the tree and open a session at the configured home.
    pub fn new(config: &TerminalConfig) -> Result<Self, TerminalError> {
        let tree = match &config.terminal.tree_file {
            Some(path) => {
                info!(path = %path.display(), "loading tree manifest");
                VirtualFileTree::from_manifest_file(path)?
            }
            None => VirtualFileTree::default(),
        };
        let interpreter = CommandInterpreter::new(Arc::new(tree), &config.terminal)?;
        Ok(Self {
            interpreter,
            color: config.terminal.color,
        })
    }

    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    /// Execute a CLI command against the given input and output streams.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: &Commands,
        input: R,
        output: W,
    ) -> Result<(), TerminalError> {
        match command {
            Commands::Shell => self.run_shell(input, output),
            Commands::Exec {
                lines,
                script,
                format,
            } => {
                let lines = match script {
                    Some(path) => read_lines(std::fs::read_to_string(path)?.as_bytes())?,
                    None if lines.is_empty() => read_lines(input)?,
                    None => lines.clone(),
                };
                self.run_exec(&lines, format, output)
            }
            Commands::Banner => {
                let mut output = output;
                for line in BANNER {
                    writeln!(output, "{}", line)?;
                }
                Ok(())
            }
        }
    }

    fn run_shell<R: BufRead, W: Write>(&mut self, mut input: R, output: W) -> Result<(), TerminalError> {
        let mut console = Console::new(output, self.color, EchoMode::Interactive);
        console.render_startup(&self.interpreter)?;

        let mut line = String::new();
        loop {
            console.render_prompt(&self.interpreter.prompt())?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                let mut output = console.into_inner();
                writeln!(output)?;
                info!("input closed, ending session");
                return Ok(());
            }
            let evaluation = self.interpreter.evaluate(&line);
            console.render(&evaluation, &self.interpreter)?;
        }
    }

    fn run_exec<W: Write>(&mut self, lines: &[String], format: &str, output: W) -> Result<(), TerminalError> {
        match format {
            "text" => {
                let mut console = Console::new(output, false, EchoMode::Transcript);
                for line in lines {
                    let evaluation = self.interpreter.evaluate(line);
                    console.render(&evaluation, &self.interpreter)?;
                }
                Ok(())
            }
            "json" => {
                let evaluations: Vec<Evaluation> =
                    lines.iter().map(|line| self.interpreter.evaluate(line)).collect();
                let mut output = output;
                serde_json::to_writer_pretty(&mut output, &evaluations)?;
                writeln!(output)?;
                Ok(())
            }
            other => Err(TerminalError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

fn read_lines<R: BufRead>(input: R) -> Result<Vec<String>, TerminalError> {
    Ok(input.lines().collect::<Result<Vec<_>, _>>()?)
}
