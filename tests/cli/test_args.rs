//! Tests for clap argument parsing

use clap::Parser;
use searchindex::cli::commands::completions::write_completions;
use searchindex::cli::{Cli, Commands, OutputFormat};
use searchindex::core::types::ItemKind;

/// Global flags are accepted after the subcommand
#[test]
fn test_args_global_flags() {
    let cli = Cli::try_parse_from([
        "searchindex",
        "summary",
        "--format",
        "json",
        "--index",
        "/tmp/search-index.js",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(
        cli.index.as_deref(),
        Some(std::path::Path::new("/tmp/search-index.js"))
    );
    assert!(matches!(cli.command, Commands::Summary(_)));
}

/// Item kinds parse from their short names
#[test]
fn test_args_items_kind() {
    let cli = Cli::try_parse_from(["searchindex", "items", "--kind", "fn"]).unwrap();

    match cli.command {
        Commands::Items(args) => {
            assert_eq!(args.crate_name, "strconv");
            assert_eq!(args.kind, Some(ItemKind::Function));
        }
        other => panic!("unexpected command {other:?}"),
    }

    assert!(Cli::try_parse_from(["searchindex", "items", "--kind", "gadget"]).is_err());
}

/// Negative numbers are values, not flags
#[test]
fn test_args_parse_int_negative() {
    let cli = Cli::try_parse_from(["searchindex", "parse-int", "-42", "--bit-size", "32"]).unwrap();

    match cli.command {
        Commands::ParseInt(args) => {
            assert_eq!(args.value, "-42");
            assert_eq!(args.base, 10);
            assert_eq!(args.bit_size, 32);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

/// Completion scripts mention the binary name
#[test]
fn test_completions_bash() {
    let mut out = Vec::new();
    write_completions(clap_complete::Shell::Bash, &mut out).unwrap();

    let script = String::from_utf8(out).unwrap();
    assert!(script.contains("searchindex"));
}
