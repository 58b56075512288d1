//! CLI adapter for searchindex
//!
//! Provides a command-line interface over the loader, the item
//! resolver, the publisher and the bundled `strconv` functions.
//!
//! ```text
//!     +------------------+      +------------------+
//!     |      core/       |      |    strconv/      |
//!     |  (index model)   |      | (documented API) |
//!     +--------+---------+      +--------+---------+
//!              |                         |
//!              +------------+------------+
//!                           |
//!                           v
//!                  +------------------+
//!                  |      cli/        |
//!                  | (clap adapter)   |
//!                  +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// searchindex - documentation search index inspector
///
/// Loads the strconv documentation search index (embedded, or from a
/// `search-index.js` file), shows its items and publishes it to the
/// configured output ports.
#[derive(Parser, Debug)]
#[command(name = "searchindex")]
#[command(version)]
#[command(about = "Documentation search index loader", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Load this search-index.js (or JSON) instead of the embedded index
    #[arg(long, global = true)]
    pub index: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show crates in the index with item counts per kind
    Summary(commands::SummaryArgs),

    /// List the resolved items of one crate
    Items(commands::ItemsArgs),

    /// Check the index shape (parallel sequence lengths, references)
    Validate(commands::ValidateArgs),

    /// Publish the index to the init-search hook and/or an export file
    Publish(commands::PublishArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Parse a signed integer with strconv::parse_int
    #[command(name = "parse-int")]
    ParseInt(commands::parse::ParseArgs),

    /// Parse an unsigned integer with strconv::parse_uint
    #[command(name = "parse-uint")]
    ParseUint(commands::parse::ParseArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  searchindex completions bash > ~/.local/share/bash-completion/completions/searchindex
    ///   zsh:   searchindex completions zsh > ~/.zfunc/_searchindex
    ///   fish:  searchindex completions fish > ~/.config/fish/completions/searchindex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Commands that need neither configuration nor a loaded index
    match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::ParseInt(args) => return commands::parse::execute_int(args, cli.format),
        Commands::ParseUint(args) => return commands::parse::execute_uint(args, cli.format),
        _ => {}
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let mut config = Config::load_with_xdg(&xdg)?;
    if let Some(path) = cli.index {
        config.index.path = Some(path);
    }
    config.log_config();

    // Validation must see indexes that would fail to load
    if let Commands::Validate(args) = cli.command {
        return commands::validate::execute(args, &config, cli.format).await;
    }

    let services = Arc::new(Services::load(config).await?);

    match cli.command {
        Commands::Summary(args) => commands::summary::execute(args, &services, cli.format).await,
        Commands::Items(args) => commands::items::execute(args, &services, cli.format).await,
        Commands::Publish(args) => commands::publish::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Validate(_)
        | Commands::Completions(_)
        | Commands::ParseInt(_)
        | Commands::ParseUint(_) => unreachable!(), // Handled above
    }
}
