use std::path::PathBuf;

use clap::Parser;

use roster::cli::{Cli, Commands, OutputFormat};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["roster"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

#[test]
fn parse_no_subcommand_defaults_to_shell() {
    let cli = parse(&[]);
    assert!(cli.command.is_none());
    assert_eq!(cli.output_format(), OutputFormat::Human);
}

#[test]
fn parse_add_defaults_missing_fields() {
    match parse(&["add", "--id", "7", "--name", "Cy"]).command {
        Some(Commands::Add(args)) => {
            assert_eq!(args.id, "7");
            assert_eq!(args.name, "Cy");
            assert_eq!(args.roll_no, "");
            assert_eq!(args.grade, "");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_update_keeps_unset_flags_empty() {
    match parse(&["update", "7", "--grade", "B"]).command {
        Some(Commands::Update(args)) => {
            assert_eq!(args.id, "7");
            assert!(args.name.is_none());
            assert!(args.roll_no.is_none());
            assert_eq!(args.grade.as_deref(), Some("B"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_extract_splits_columns() {
    match parse(&["extract", "data.csv", "-c", "Name,Grade"]).command {
        Some(Commands::Extract(args)) => {
            assert_eq!(args.path, PathBuf::from("data.csv"));
            assert_eq!(args.columns, vec!["Name", "Grade"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_extract_requires_columns() {
    assert!(Cli::try_parse_from(["roster", "extract", "data.csv"]).is_err());
}

#[test]
fn parse_global_flags_after_subcommand() {
    let cli = parse(&["list", "--robot", "--rows", "r.csv", "-vv"]);
    assert_eq!(cli.output_format(), OutputFormat::Robot);
    assert_eq!(cli.rows, Some(PathBuf::from("r.csv")));
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Some(Commands::List(_))));
}
