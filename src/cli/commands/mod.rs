//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod extract;
pub mod import;
pub mod list;
pub mod shell;
pub mod show;
pub mod update;

use crate::app::AppContext;
use crate::cli::colors::{RosterStyles, styled};
use crate::cli::output::{OutputFormat, emit_robot, robot_ok};
use crate::core::{LoadStatus, RecordStore};
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive numbered menu (default)
    Shell(shell::ShellArgs),

    /// Add a student
    Add(add::AddArgs),

    /// List all students
    List(list::ListArgs),

    /// Show one student by ID
    Show(show::ShowArgs),

    /// Update fields of a student
    Update(update::UpdateArgs),

    /// Delete a student by ID
    Delete(delete::DeleteArgs),

    /// Replace the roster with the rows of a CSV file
    Import(import::ImportArgs),

    /// Print selected columns of a CSV file
    Extract(extract::ExtractArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Shell(args) => shell::run(ctx, args),
        Commands::Add(args) => add::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Update(args) => update::run(ctx, args),
        Commands::Delete(args) => delete::run(ctx, args),
        Commands::Import(args) => import::run(ctx, args),
        Commands::Extract(args) => extract::run(ctx, args),
    }
}

/// Open the roster for a one-shot command, warning on a corrupt document file.
fn open_store(ctx: &AppContext) -> Result<RecordStore> {
    let (store, status) = ctx.open_store()?;
    if let LoadStatus::Corrupt(reason) = &status {
        if ctx.output_format == OutputFormat::Human {
            eprintln!(
                "{}",
                styled(
                    format!("Document file is corrupt, starting with an empty roster ({reason})"),
                    RosterStyles::warning,
                    ctx.color,
                )
            );
        }
    }
    Ok(store)
}

/// Print a one-line confirmation in human mode or `data` in robot mode.
fn report<T: Serialize>(ctx: &AppContext, message: &str, data: T) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Robot => emit_robot(&robot_ok(data)),
        OutputFormat::Human => {
            println!("{}", styled(message, RosterStyles::success, ctx.color));
            Ok(())
        }
    }
}
