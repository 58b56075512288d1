//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod items;
pub mod parse;
pub mod publish;
pub mod summary;
pub mod validate;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use items::ItemsArgs;
pub use parse::ParseArgs;
pub use publish::PublishArgs;
pub use summary::SummaryArgs;
pub use validate::ValidateArgs;

use crate::core::error::IndexError;
use crate::core::services::Services;

/// Turn a lookup error into a CLI error, listing known crates when one is missing
pub(crate) fn with_crate_hint(err: IndexError, services: &Services) -> Box<dyn std::error::Error> {
    if err.is_not_found() {
        let known: Vec<&str> = services.index.crate_names().collect();
        format!("{err}. Available crates: {}", known.join(", ")).into()
    } else {
        err.into()
    }
}
