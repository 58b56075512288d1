//! Unified service container for searchindex
//!
//! Provides shared access to the configuration and the loaded index.

use crate::core::config::Config;
use crate::core::error::{IndexError, Result};
use crate::core::loader;
use crate::core::types::{CrateEntry, SearchIndex};
use std::sync::Arc;

/// Unified services container
#[derive(Debug, Clone)]
pub struct Services {
    /// Loaded search index, read-only for the life of the process
    pub index: Arc<SearchIndex>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Load the configured index (the embedded one by default)
    pub async fn load(config: Config) -> Result<Self> {
        let index = match &config.index.path {
            Some(path) => Arc::new(loader::load_file(path).await?),
            None => loader::embedded()?,
        };

        Ok(Self::with_index(config, index))
    }

    /// Build services around an already loaded index
    pub fn with_index(config: Config, index: Arc<SearchIndex>) -> Self {
        Self {
            index,
            config: Arc::new(config),
        }
    }

    /// Look up a crate entry, failing with `CrateNotFound`
    pub fn crate_entry(&self, name: &str) -> Result<&CrateEntry> {
        self.index
            .get(name)
            .ok_or_else(|| IndexError::CrateNotFound(name.to_string()))
    }
}
