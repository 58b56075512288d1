//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub index: IndexSection,
    pub publish: PublishSection,
}

#[derive(Debug, Serialize)]
pub struct IndexSection {
    pub path: String,
    pub crates: usize,
}

#[derive(Debug, Serialize)]
pub struct PublishSection {
    pub init_search: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<String>,
}

/// Execute the show-config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;
    let xdg = XdgDirs::new();

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        index: IndexSection {
            path: config
                .index
                .path
                .as_ref()
                .map_or_else(|| "embedded".to_string(), |p| p.display().to_string()),
            crates: services.index.len(),
        },
        publish: PublishSection {
            init_search: config.publish.init_search,
            export_path: config
                .publish
                .export_path
                .as_ref()
                .map(|p| p.display().to_string()),
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  index:");
            println!("    path: {}", response.index.path);
            println!("    crates: {}", response.index.crates);
            println!("  publish:");
            println!("    init_search: {}", response.publish.init_search);
            println!(
                "    export_path: {}",
                response.publish.export_path.as_deref().unwrap_or("(none)")
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
