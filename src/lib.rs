//! searchindex - documentation search index loader
//!
//! Loads the search index that a documentation generator emits for the
//! `strconv` crate, checks its shape, resolves its compact item tables
//! into readable items and publishes it to whichever output ports the
//! host provides.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - types (index data model), loader, validate, items
//!   - publish (init-search hook and export slot)
//!   - config, error, xdg, services
//!
//! - **strconv**: The documented crate itself (`parse_int`, `parse_uint`)
//!
//! - **cli**: clap adapter over core and strconv
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use searchindex::core::{load, publish, Exports, PublishTargets};
//!
//! let index = Arc::new(load().unwrap());
//! let mut exports = Exports::new();
//! publish(&index, PublishTargets::none().with_exports(&mut exports));
//! assert_eq!(exports.search_index.as_deref(), Some(&*index));
//! ```

// Core domain logic
pub mod core;

// The documented crate
pub mod strconv;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{IndexError, Result};
pub use core::services::Services;
pub use core::types::*;
