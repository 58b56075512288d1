//! Core domain logic
//!
//! This module contains everything that is independent of the
//! command-line front end.
//!
//! # Architecture
//!
//! - **types**: The search index data model
//! - **loader**: Embedded artifact, unwrapping and deserialization
//! - **validate**: Cross-field shape invariants
//! - **items**: Resolved per-item views and signature rendering
//! - **publish**: Injected output ports
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **xdg**: XDG directory handling
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod items;
pub mod loader;
pub mod publish;
pub mod services;
pub mod types;
pub mod validate;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{IndexError, Result};
pub use loader::{load, load_str};
pub use publish::{publish, Exports, InitSearchHook, PublishReport, PublishTargets};
pub use services::Services;
pub use types::{CrateEntry, ItemKind, SearchIndex};
