//! roster - Student roster CLI
//!
//! Keeps a student roster in sync across a JSON document file and a CSV row
//! file, through an interactive menu or one-shot subcommands.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use roster::Result;
use roster::app::AppContext;
use roster::cli::Cli;
use roster::cli::commands::{self, Commands};
use roster::cli::output::robot_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.robot {
                println!("{}", robot_error(&e));
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    match &cli.command {
        Some(command) => commands::run(&ctx, command),
        None => commands::run(&ctx, &Commands::Shell(commands::shell::ShellArgs::default())),
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,roster=info",
        1 => "info,roster=debug",
        2 => "debug,roster=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
