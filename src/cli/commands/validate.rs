//! Validate command - check the shape of a search index

use crate::cli::output::{colors, print_success, print_warning};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::loader;
use crate::core::validate::{inspect_index, ValidationReport};
use clap::Args;
use serde::Serialize;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Only report crates with problems
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Validation response
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub source: String,
    pub consistent: bool,
    pub crates: Vec<ValidationReport>,
}

/// Read and inspect the configured index without rejecting bad shapes
pub async fn check(config: &Config) -> crate::core::Result<ValidateResponse> {
    let (source, index) = match &config.index.path {
        Some(path) => {
            let text = tokio::fs::read_to_string(path).await?;
            (path.display().to_string(), loader::parse_str(&text)?)
        }
        None => (
            "embedded".to_string(),
            loader::parse_str(loader::EMBEDDED_SEARCH_INDEX)?,
        ),
    };

    let crates = inspect_index(&index);
    Ok(ValidateResponse {
        source,
        consistent: crates.iter().all(ValidationReport::is_consistent),
        crates,
    })
}

/// Execute the validate command
pub async fn execute(
    args: ValidateArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut response = check(config).await?;

    if args.quiet {
        response.crates.retain(|report| !report.is_consistent());
    }

    match format {
        OutputFormat::Human => {
            println!("Index: {}", colors::item_path(&response.source));
            for report in &response.crates {
                println!(
                    "  {} {}",
                    colors::crate_name(&report.crate_name),
                    colors::dim(&format!(
                        "({} items, {} type paths, {} functions)",
                        report.items, report.type_paths, report.functions
                    ))
                );
                for problem in &report.problems {
                    println!("    - {}", colors::error(problem));
                }
            }

            if response.consistent {
                print_success("Index is consistent");
            } else {
                print_warning("Index has shape problems");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    if response.consistent {
        Ok(())
    } else {
        let count: usize = response.crates.iter().map(|r| r.problems.len()).sum();
        Err(format!("validation failed with {count} problem(s)").into())
    }
}
