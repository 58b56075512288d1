//! Tests for loading the embedded and external search indexes

use crate::common::{write_index_file, MINIMAL_INDEX_JSON};
use searchindex::core::loader::{self, EMBEDDED_SEARCH_INDEX};
use searchindex::core::types::ItemKind;
use searchindex::core::IndexError;
use tempfile::TempDir;

// =============================================================================
// Embedded index
// =============================================================================

/// The embedded index holds exactly the strconv crate
#[test]
fn test_load_single_crate() {
    let index = loader::load().unwrap();

    assert_eq!(index.len(), 1);
    assert_eq!(index.crate_names().collect::<Vec<_>>(), vec!["strconv"]);
}

/// Every parallel sequence has one entry per item
#[test]
fn test_load_parallel_lengths() {
    let index = loader::load().unwrap();
    let entry = index.get("strconv").unwrap();

    assert_eq!(entry.kinds.len(), 39);
    assert_eq!(entry.names.len(), 39);
    assert_eq!(entry.paths.len(), 39);
    assert_eq!(entry.descriptions.len(), 39);
    assert_eq!(entry.parents.len(), 39);
    assert_eq!(entry.functions.len(), 39);
    assert_eq!(entry.type_paths.len(), 17);
}

/// Crate documentation is the first sentence of the crate docs
#[test]
fn test_load_crate_doc() {
    let index = loader::load().unwrap();
    let entry = index.get("strconv").unwrap();

    assert!(entry
        .doc
        .starts_with("Crate strconv implements conversions to and from string"));
}

/// Spot checks on decoded item tables
#[test]
fn test_load_decoded_values() {
    let index = loader::load().unwrap();
    let entry = index.get("strconv").unwrap();

    assert_eq!(entry.names[0], "InvalidBase");
    assert_eq!(entry.kinds[0], ItemKind::Variant);
    assert_eq!(entry.paths[0], "strconv");
    assert_eq!(entry.kinds[3], ItemKind::Struct);
    assert_eq!(entry.kinds[4], ItemKind::Enum);
    assert_eq!(entry.names[24], "parse_int");
    assert_eq!(entry.kinds[24], ItemKind::Function);
    assert_eq!(entry.paths[37], "strconv::NumErrorCause");
    assert_eq!(entry.parents[37], 16);
    assert_eq!(entry.descriptions[21], "Calls <code>U::from(self)</code>.");
}

/// Loading twice yields equal data
#[test]
fn test_load_is_deterministic() {
    assert_eq!(loader::load().unwrap(), loader::load().unwrap());
}

// =============================================================================
// External artifacts
// =============================================================================

/// The script form on disk loads the same index as the embedded copy
#[tokio::test]
async fn test_load_file_script_form() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_index_file(temp_dir.path(), "search-index.js", EMBEDDED_SEARCH_INDEX);

    let index = loader::load_file(&path).await.unwrap();
    assert_eq!(index, loader::load().unwrap());
}

/// A bare JSON object is accepted too
#[tokio::test]
async fn test_load_file_bare_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_index_file(temp_dir.path(), "index.json", MINIMAL_INDEX_JSON);

    let index = loader::load_file(&path).await.unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("demo").unwrap().len(), 3);
}

/// Missing files surface as IO errors
#[tokio::test]
async fn test_load_file_missing() {
    let temp_dir = TempDir::new().unwrap();
    let err = loader::load_file(temp_dir.path().join("nope.js"))
        .await
        .unwrap_err();

    assert!(matches!(err, IndexError::IoError(_)));
}

/// Truncated artifacts are malformed, not panics
#[test]
fn test_load_truncated_artifact() {
    let half = &EMBEDDED_SEARCH_INDEX[..EMBEDDED_SEARCH_INDEX.len() / 2];
    let err = loader::load_str(half).unwrap_err();

    assert!(err.is_malformed());
}

/// Unknown item kind tags are rejected
#[test]
fn test_load_unknown_kind_tag() {
    let text = r#"{"demo":{"doc":"","t":[99],"n":["x"],"q":[""],"d":[""],"i":[0]}}"#;
    let err = loader::load_str(text).unwrap_err();

    assert!(err.is_malformed());
    assert!(err.to_string().contains("unknown item kind tag 99"));
}
