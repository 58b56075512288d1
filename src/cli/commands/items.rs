//! Items command - list the resolved items of one crate

use crate::cli::output::{colors, strip_html, truncate};
use crate::cli::OutputFormat;
use crate::core::items::Item;
use crate::core::services::Services;
use crate::core::types::{CrateEntry, ItemKind};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the items command
#[derive(Args, Debug)]
pub struct ItemsArgs {
    /// Crate to list
    #[arg(long = "crate", short = 'c', default_value = "strconv")]
    pub crate_name: String,

    /// Only list items of this kind (fn, struct, method, variant, ...)
    #[arg(long, short = 'k')]
    pub kind: Option<ItemKind>,

    /// Only list items whose name contains this text
    #[arg(long, short = 'n')]
    pub name: Option<String>,
}

/// One resolved item
#[derive(Debug, Serialize)]
pub struct ItemOutput {
    pub index: usize,
    pub kind: String,
    pub path: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Items response
#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    #[serde(rename = "crate")]
    pub crate_name: String,
    pub total_items: usize,
    pub items: Vec<ItemOutput>,
}

impl ItemOutput {
    fn from_item(entry: &CrateEntry, item: &Item<'_>) -> Self {
        Self {
            index: item.index,
            kind: item.kind.to_string(),
            path: item.full_path(),
            description: strip_html(item.description),
            signature: item.signature.map(|sig| entry.render_signature(sig)),
        }
    }
}

/// Resolve and filter the items of one crate
pub fn list_items(services: &Services, args: &ItemsArgs) -> crate::core::Result<ItemsResponse> {
    let entry = services.crate_entry(&args.crate_name)?;

    let items: Vec<ItemOutput> = entry
        .items()
        .filter(|item| args.kind.map_or(true, |kind| item.kind == kind))
        .filter(|item| {
            args.name
                .as_deref()
                .map_or(true, |needle| item.name.contains(needle))
        })
        .map(|item| ItemOutput::from_item(entry, &item))
        .collect();

    tracing::debug!(
        "Resolved {} of {} items in '{}'",
        items.len(),
        entry.len(),
        args.crate_name
    );

    Ok(ItemsResponse {
        crate_name: args.crate_name.clone(),
        total_items: items.len(),
        items,
    })
}

/// Execute the items command
pub async fn execute(
    args: ItemsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response =
        list_items(services, &args).map_err(|e| super::with_crate_hint(e, services))?;

    match format {
        OutputFormat::Human => {
            if response.items.is_empty() {
                println!(
                    "No matching items in '{}'",
                    colors::crate_name(&response.crate_name)
                );
                return Ok(());
            }

            println!(
                "{} item(s) in '{}':\n",
                colors::number(&response.total_items.to_string()),
                colors::crate_name(&response.crate_name)
            );

            for item in &response.items {
                let signature = item.signature.as_deref().unwrap_or("");
                println!(
                    "{:>11} {}{}",
                    colors::kind(&item.kind),
                    colors::item_path(&item.path),
                    colors::dim(signature)
                );
                if !item.description.is_empty() {
                    println!("            {}", colors::dim(&truncate(&item.description, 80)));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
