//! roster extract - Print selected columns of a CSV file
//!
//! Read-only: the roster files are not opened.

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::colors::{RosterStyles, styled};
use crate::cli::formatters::projection_line;
use crate::cli::output::{OutputFormat, emit_robot, robot_ok};
use crate::core::RecordStore;
use crate::error::Result;
use crate::storage::RowMap;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// CSV file to read
    pub path: PathBuf,

    /// Comma-separated column names to keep
    #[arg(long, short, value_delimiter = ',', required = true)]
    pub columns: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &ExtractArgs) -> Result<()> {
    let columns: Vec<&str> = args.columns.iter().map(|c| c.trim()).collect();
    let rows = RecordStore::extract_columns(&args.path, &columns)?;

    match ctx.output_format {
        OutputFormat::Robot => emit_robot(&robot_ok(&rows)),
        OutputFormat::Human => {
            // Same notice for a file without data rows and for rows holding
            // none of the requested columns.
            if rows.iter().all(RowMap::is_empty) {
                println!(
                    "{}",
                    styled("No matching columns found in the file.", RosterStyles::warning, ctx.color)
                );
            } else {
                for row in &rows {
                    println!("{}", projection_line(row));
                }
            }
            Ok(())
        }
    }
}
