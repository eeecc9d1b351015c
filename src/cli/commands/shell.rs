//! roster shell - Interactive numbered menu

use std::io;

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::shell::Shell;

#[derive(Args, Debug, Default)]
pub struct ShellArgs {}

pub fn run(ctx: &AppContext, _args: &ShellArgs) -> Result<()> {
    let (store, status) = ctx.open_store()?;
    let mut shell = Shell::new(store, io::stdin().lock(), io::stdout().lock(), ctx.color);
    shell.announce_load(&status)?;
    shell.run()
}
