//! roster show - Show one student

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::record_detail;
use crate::cli::output::{OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Student ID to look up
    pub id: String,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let store = super::open_store(ctx)?;
    let record = store.search(args.id.trim())?;

    match ctx.output_format {
        OutputFormat::Robot => emit_robot(&robot_ok(record)),
        OutputFormat::Human => {
            emit_human(&record_detail(record));
            Ok(())
        }
    }
}
