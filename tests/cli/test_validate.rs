//! Tests for the validate CLI command

use crate::common::{write_index_file, BROKEN_INDEX_JSON, MINIMAL_INDEX_JSON};
use searchindex::cli::commands::validate::{check, execute, ValidateArgs};
use searchindex::cli::OutputFormat;
use searchindex::core::config::Config;
use tempfile::TempDir;

fn config_for(path: Option<std::path::PathBuf>) -> Config {
    let mut config = Config::default();
    config.index.path = path;
    config
}

/// The embedded index validates cleanly
#[tokio::test]
async fn test_validate_embedded_human() {
    let args = ValidateArgs { quiet: false };

    let result = execute(args, &Config::default(), OutputFormat::Human).await;
    assert!(result.is_ok(), "Validate should succeed: {:?}", result.err());
}

/// The report names its source
#[tokio::test]
async fn test_validate_check_embedded() {
    let response = check(&Config::default()).await.unwrap();

    assert_eq!(response.source, "embedded");
    assert!(response.consistent);
    assert_eq!(response.crates.len(), 1);
}

/// An external consistent file validates in JSON mode
#[tokio::test]
async fn test_validate_external_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_index_file(temp_dir.path(), "index.json", MINIMAL_INDEX_JSON);
    let args = ValidateArgs { quiet: true };

    let result = execute(args, &config_for(Some(path)), OutputFormat::Json).await;
    assert!(result.is_ok(), "Validate should succeed: {:?}", result.err());
}

/// A broken file is reported, then the command fails
#[tokio::test]
async fn test_validate_broken_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_index_file(temp_dir.path(), "broken.json", BROKEN_INDEX_JSON);
    let config = config_for(Some(path));

    let response = check(&config).await.unwrap();
    assert!(!response.consistent);
    assert_eq!(response.crates[0].problems.len(), 2);

    let result = execute(ValidateArgs { quiet: false }, &config, OutputFormat::Human).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("2 problem(s)"));
}

/// Text that is not an index at all is an error, not a report
#[tokio::test]
async fn test_validate_unparseable() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_index_file(temp_dir.path(), "junk.js", "console.log(1);");

    let result = check(&config_for(Some(path))).await;
    assert!(result.unwrap_err().is_malformed());
}
