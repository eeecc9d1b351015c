//! Command-line interface for roster

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub mod colors;
pub mod commands;
pub mod formatters;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Keep a student roster in sync across CSV and JSON files"
)]
pub struct Cli {
    /// Config file to use instead of the global and project files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON document file (default: students.json)
    #[arg(long, global = true)]
    pub document: Option<PathBuf>,

    /// CSV row file (default: students.csv)
    #[arg(long, global = true)]
    pub rows: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Machine-readable JSON output for one-shot commands
    #[arg(long, global = true)]
    pub robot: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.robot {
            OutputFormat::Robot
        } else {
            OutputFormat::Human
        }
    }
}
