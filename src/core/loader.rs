//! Search index loading
//!
//! The artifact is either a bare JSON object or the script form rustdoc
//! writes to `search-index.js`:
//!
//! ```text
//! var searchIndex = JSON.parse('{\
//! "strconv":{...}\
//! }');
//! if (typeof window !== 'undefined' && window.initSearch) {window.initSearch(searchIndex)};
//! if (typeof exports !== 'undefined') {exports.searchIndex = searchIndex};
//! ```
//!
//! Only the `JSON.parse` payload is read; the registration statements
//! are replaced by [`crate::core::publish`].

use crate::core::error::{IndexError, Result};
use crate::core::types::SearchIndex;
use crate::core::validate::validate_index;
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

/// The search index artifact compiled into the binary
pub const EMBEDDED_SEARCH_INDEX: &str = include_str!("../../assets/search-index.js");

static SCRIPT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*var\s+searchIndex\s*=\s*JSON\.parse\('").expect("valid prefix regex")
});

static EMBEDDED: OnceCell<Arc<SearchIndex>> = OnceCell::new();

/// Load the embedded search index
pub fn load() -> Result<SearchIndex> {
    load_str(EMBEDDED_SEARCH_INDEX)
}

/// Shared instance of the embedded index, loaded on first use
pub fn embedded() -> Result<Arc<SearchIndex>> {
    EMBEDDED
        .get_or_try_init(|| load().map(Arc::new))
        .map(Arc::clone)
}

/// Load a search index from artifact text
pub fn load_str(text: &str) -> Result<SearchIndex> {
    let index = parse_str(text)?;
    validate_index(&index)?;

    tracing::debug!(
        "Loaded search index: {} crates, {} items",
        index.len(),
        index.item_count()
    );

    Ok(index)
}

/// Deserialize artifact text without checking cross-field invariants
pub fn parse_str(text: &str) -> Result<SearchIndex> {
    let json = extract_json(text)?;
    serde_json::from_str(&json).map_err(|e| IndexError::MalformedIndex(e.to_string()))
}

/// Load a search index artifact from disk
pub async fn load_file(path: impl AsRef<Path>) -> Result<SearchIndex> {
    let path = path.as_ref();
    tracing::info!("Loading search index from {:?}", path);

    let text = tokio::fs::read_to_string(path).await?;
    load_str(&text)
}

/// Return the JSON payload of an artifact, unescaping the script form
pub fn extract_json(text: &str) -> Result<Cow<'_, str>> {
    if text.trim_start().starts_with('{') {
        return Ok(Cow::Borrowed(text));
    }

    let prefix = SCRIPT_PREFIX.find(text).ok_or_else(|| {
        IndexError::MalformedIndex(
            "expected a JSON object or a `var searchIndex = JSON.parse('...')` script".to_string(),
        )
    })?;

    unescape_single_quoted(&text[prefix.end()..]).map(Cow::Owned)
}

/// Decode a single-quoted JavaScript string body up to its closing quote
fn unescape_single_quoted(body: &str) -> Result<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => return Ok(out),
            '\\' => match chars.next() {
                // Line continuation
                Some('\n') => {}
                Some('\r') => {
                    let rest = chars.as_str();
                    if rest.starts_with('\n') {
                        chars.next();
                    }
                }
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => break,
            },
            _ => out.push(c),
        }
    }

    Err(IndexError::MalformedIndex(
        "unterminated JSON.parse string".to_string(),
    ))
}
