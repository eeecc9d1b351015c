//! roster import - Replace the roster with a CSV file's rows
//!
//! The imported rows are written to the document file and back to the CSV
//! file they came from.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file with an ID,Name,Roll_no,Grade header
    pub path: PathBuf,
}

pub fn run(ctx: &AppContext, args: &ImportArgs) -> Result<()> {
    let mut store = super::open_store(ctx)?;
    let count = store.import_rows(&args.path)?;

    super::report(
        ctx,
        &format!("External CSV file loaded successfully! ({count} records)"),
        json!({
            "imported": count,
            "rows_path": store.rows_path(),
            "document_path": store.document_path(),
        }),
    )
}
