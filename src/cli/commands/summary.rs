//! Summary command - crates in the index with per-kind item counts

use crate::cli::output::{colors, print_header, strip_html};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::CrateEntry;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Only summarize this crate
    #[arg(long = "crate", short = 'c')]
    pub crate_name: Option<String>,
}

/// Summary of one crate
#[derive(Debug, Serialize)]
pub struct CrateSummary {
    pub name: String,
    pub doc: String,
    pub items: usize,
    pub type_paths: usize,
    pub kinds: BTreeMap<String, usize>,
}

/// Summary response
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_crates: usize,
    pub total_items: usize,
    pub crates: Vec<CrateSummary>,
}

impl CrateSummary {
    fn from_entry(name: &str, entry: &CrateEntry) -> Self {
        Self {
            name: name.to_string(),
            doc: strip_html(&entry.doc),
            items: entry.len(),
            type_paths: entry.type_paths.len(),
            kinds: entry
                .kind_counts()
                .into_iter()
                .map(|(kind, count)| (kind.to_string(), count))
                .collect(),
        }
    }
}

/// Build the summary for one crate or the whole index
pub fn summarize(
    services: &Services,
    crate_name: Option<&str>,
) -> crate::core::Result<SummaryResponse> {
    let crates: Vec<CrateSummary> = match crate_name {
        Some(name) => vec![CrateSummary::from_entry(name, services.crate_entry(name)?)],
        None => services
            .index
            .iter()
            .map(|(name, entry)| CrateSummary::from_entry(name, entry))
            .collect(),
    };

    Ok(SummaryResponse {
        total_crates: crates.len(),
        total_items: crates.iter().map(|c| c.items).sum(),
        crates,
    })
}

/// Execute the summary command
pub async fn execute(
    args: SummaryArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = summarize(services, args.crate_name.as_deref())
        .map_err(|e| super::with_crate_hint(e, services))?;

    match format {
        OutputFormat::Human => {
            print_header(&format!(
                "Search index: {} crate(s), {} item(s)\n",
                response.total_crates, response.total_items
            ));

            for summary in &response.crates {
                println!(
                    "{} {}",
                    colors::crate_name(&summary.name),
                    colors::dim(&format!(
                        "({} items, {} type paths)",
                        summary.items, summary.type_paths
                    ))
                );
                if !summary.doc.is_empty() {
                    println!("  {}", summary.doc);
                }
                for (kind, count) in &summary.kinds {
                    println!(
                        "    {:<12} {}",
                        colors::kind(kind),
                        colors::number(&count.to_string())
                    );
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
