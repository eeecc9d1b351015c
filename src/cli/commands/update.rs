//! roster update - Update fields of a student
//!
//! Only the flags given are changed. Passing a flag with an empty value
//! clears that field.

use clap::Args;
use serde_json::json;
use tracing::debug;

use crate::app::AppContext;
use crate::core::RecordPatch;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Student ID to update
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New roll number
    #[arg(long)]
    pub roll_no: Option<String>,

    /// New grade
    #[arg(long)]
    pub grade: Option<String>,
}

pub fn run(ctx: &AppContext, args: &UpdateArgs) -> Result<()> {
    let patch = RecordPatch {
        name: args.name.clone(),
        roll_no: args.roll_no.clone(),
        grade: args.grade.clone(),
    };
    if patch.is_empty() {
        debug!(id = %args.id, "no fields supplied, rewriting unchanged record");
    }

    let mut store = super::open_store(ctx)?;
    let updated = store.update(args.id.trim(), &patch)?;

    super::report(ctx, "Student data updated!", json!({ "updated": updated }))
}
