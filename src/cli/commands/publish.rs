//! Publish command - hand the index to the CLI-backed output ports
//!
//! The init-search hook is a closure that records the crates it was
//! given; the export slot is written to a JSON file.

use crate::cli::output::{colors, print_success};
use crate::cli::OutputFormat;
use crate::core::publish::{publish, Exports, PublishReport, PublishTargets};
use crate::core::services::Services;
use crate::core::types::SearchIndex;
use clap::Args;
use serde::Serialize;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the publish command
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Invoke the init-search hook (overrides config when set)
    #[arg(long)]
    pub init_search: bool,

    /// Write the export slot to this file (overrides config)
    #[arg(long, short = 'o')]
    pub export: Option<PathBuf>,
}

/// Publish response
#[derive(Debug, Serialize)]
pub struct PublishResponse {
    #[serde(flatten)]
    pub report: PublishReport,
    /// Crates the init-search hook received
    pub init_search_crates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<String>,
}

/// Publish `services.index` to the requested ports
///
/// The export file, when requested, contains `{"searchIndex": ...}`.
pub async fn publish_index(
    services: &Services,
    init_search: bool,
    export_path: Option<&Path>,
) -> crate::core::Result<PublishResponse> {
    let mut exports = Exports::new();
    let received: RefCell<Vec<String>> = RefCell::new(Vec::new());

    let report = {
        let hook = |index: &Arc<SearchIndex>| {
            tracing::info!("initSearch received {} crate(s)", index.len());
            received
                .borrow_mut()
                .extend(index.crate_names().map(str::to_string));
        };

        let mut targets = PublishTargets::none();
        if init_search {
            targets = targets.with_init_search(&hook);
        }
        if export_path.is_some() {
            targets = targets.with_exports(&mut exports);
        }

        publish(&services.index, targets)
    };
    let init_search_crates = received.into_inner();

    if let Some(path) = export_path {
        let json = serde_json::to_string_pretty(&exports)?;
        tokio::fs::write(path, json).await?;
        tracing::info!("Wrote searchIndex export to {:?}", path);
    }

    Ok(PublishResponse {
        report,
        init_search_crates,
        export_path: export_path.map(|p| p.display().to_string()),
    })
}

/// Execute the publish command
pub async fn execute(
    args: PublishArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let init_search = args.init_search || services.config.publish.init_search;
    let export_path = args
        .export
        .or_else(|| services.config.publish.export_path.clone());

    let response = publish_index(services, init_search, export_path.as_deref()).await?;

    match format {
        OutputFormat::Human => {
            if response.report.init_search_invoked {
                println!(
                    "initSearch hook received: {}",
                    colors::crate_name(&response.init_search_crates.join(", "))
                );
            }
            if let Some(path) = &response.export_path {
                println!("searchIndex exported to {}", colors::item_path(path));
            }
            if !response.report.init_search_invoked && !response.report.exported {
                println!(
                    "{}",
                    colors::dim("No publish targets configured; nothing to do")
                );
            } else {
                print_success("Published");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
