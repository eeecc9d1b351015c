//! roster delete - Delete a student

use clap::Args;
use serde_json::json;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Student ID to delete
    pub id: String,
}

pub fn run(ctx: &AppContext, args: &DeleteArgs) -> Result<()> {
    let mut store = super::open_store(ctx)?;
    let removed = store.delete(args.id.trim())?;

    super::report(
        ctx,
        "Student deleted!",
        json!({ "deleted": args.id.trim(), "removed": removed, "count": store.len() }),
    )
}
