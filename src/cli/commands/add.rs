//! roster add - Add a student

use clap::Args;
use serde_json::json;

use crate::app::AppContext;
use crate::core::Record;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Unique student ID
    #[arg(long)]
    pub id: String,

    /// Student name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Roll number
    #[arg(long, default_value = "")]
    pub roll_no: String,

    /// Grade
    #[arg(long, default_value = "")]
    pub grade: String,
}

pub fn run(ctx: &AppContext, args: &AddArgs) -> Result<()> {
    let mut store = super::open_store(ctx)?;
    let record = Record::new(
        args.id.trim(),
        args.name.as_str(),
        args.roll_no.as_str(),
        args.grade.as_str(),
    );
    store.add(record.clone())?;

    super::report(
        ctx,
        "New student added successfully!",
        json!({ "added": record, "count": store.len() }),
    )
}
