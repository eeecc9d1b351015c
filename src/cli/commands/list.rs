//! roster list - List all students

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::formatters::roster_layout;
use crate::cli::output::{OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {}

pub fn run(ctx: &AppContext, _args: &ListArgs) -> Result<()> {
    debug!(mode = ?ctx.output_format, "output mode selected");
    let store = super::open_store(ctx)?;

    match ctx.output_format {
        OutputFormat::Robot => emit_robot(&robot_ok(store.records())),
        OutputFormat::Human => {
            emit_human(&roster_layout(store.records(), ctx.color));
            Ok(())
        }
    }
}
