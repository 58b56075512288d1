//! searchindex CLI - inspect and publish the documentation search index
//!
//! # Examples
//!
//! ```bash
//! # Crates and per-kind counts
//! searchindex summary
//!
//! # Functions of the strconv crate with signatures
//! searchindex items --crate strconv --kind fn
//!
//! # Write {"searchIndex": ...} to a file
//! searchindex publish --export search-index.json
//!
//! # Check an external artifact
//! searchindex --index ./search-index.js validate
//! ```

use clap::Parser;
use searchindex::cli::output::print_error;
use searchindex::cli::{run, Cli};

fn init_logging() {
    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "searchindex=warn".into()),
        )
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
