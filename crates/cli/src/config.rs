//! Command-line configuration.

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use crate::commands::Command;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Textual rendering, one bounds per line.
    Text,
    /// The wire tuple as JSON.
    Json,
}

/// Inspect and manipulate ring bounds.
#[derive(Debug, Parser)]
#[command(name = "ringctl", version, about)]
pub struct CliConfig {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Log level selected by `--verbose`.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Installs logging, runs the command and prints its result.
    pub fn run(self) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level())
            .with_writer(std::io::stderr)
            .init();

        let result = self.command.execute()?;
        match self.format {
            OutputFormat::Text => println!("{}", result.to_text()),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&result.to_json()?)?)
            }
        }
        Ok(())
    }
}
