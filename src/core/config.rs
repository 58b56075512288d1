//! Configuration management for searchindex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables. The publish section replaces runtime
//! environment probing: which output ports exist is decided here,
//! once, before anything is published.

use crate::core::error::{IndexError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub publish: PublishConfig,
}

/// Where the search index comes from
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexConfig {
    /// External artifact to load instead of the embedded one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Which output ports are available
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PublishConfig {
    /// Invoke the init_search hook
    #[serde(default)]
    pub init_search: bool,

    /// Write the export slot to this file
    #[serde(default)]
    pub export_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| IndexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let config_file = xdg.config_file();
        let mut config = if config_file.exists() {
            Self::from_file(config_file)?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(path) = env::var("SEARCHINDEX_INDEX_PATH") {
            self.index.path = Some(PathBuf::from(path));
        }

        if let Ok(flag) = env::var("SEARCHINDEX_INIT_SEARCH") {
            if let Some(enabled) = parse_flag(&flag) {
                self.publish.init_search = enabled;
            }
        }

        if let Ok(path) = env::var("SEARCHINDEX_EXPORT_PATH") {
            self.publish.export_path = Some(PathBuf::from(path));
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.index.path, Some(p) if p.as_os_str().is_empty()) {
            return Err(IndexError::ConfigError(
                "Index path must not be empty".to_string(),
            ));
        }

        if matches!(&self.publish.export_path, Some(p) if p.as_os_str().is_empty()) {
            return Err(IndexError::ConfigError(
                "Export path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        match &self.index.path {
            Some(path) => tracing::debug!("  Index: {:?}", path),
            None => tracing::debug!("  Index: embedded"),
        }
        tracing::debug!("  Init search hook: {}", self.publish.init_search);
        tracing::debug!("  Export path: {:?}", self.publish.export_path);
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
