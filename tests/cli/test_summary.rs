//! Tests for the summary CLI command

use crate::common::{create_test_services, create_test_services_from, MINIMAL_INDEX_JSON};
use searchindex::cli::commands::summary::{execute, summarize, SummaryArgs};
use searchindex::cli::OutputFormat;

/// Summary of the whole embedded index
#[tokio::test]
async fn test_summary_human() {
    let services = create_test_services();
    let args = SummaryArgs { crate_name: None };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Summary should succeed: {:?}", result.err());
}

/// Summary in JSON format
#[tokio::test]
async fn test_summary_json() {
    let services = create_test_services();
    let args = SummaryArgs {
        crate_name: Some("strconv".to_string()),
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Summary should succeed: {:?}", result.err());
}

/// Unknown crates are an error
#[tokio::test]
async fn test_summary_unknown_crate() {
    let services = create_test_services();
    let args = SummaryArgs {
        crate_name: Some("serde".to_string()),
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("serde"));
}

/// Counts per kind use the short kind names
#[test]
fn test_summarize_counts() {
    let services = create_test_services();
    let response = summarize(&services, None).unwrap();

    assert_eq!(response.total_crates, 1);
    assert_eq!(response.total_items, 39);

    let strconv = &response.crates[0];
    assert_eq!(strconv.name, "strconv");
    assert_eq!(strconv.type_paths, 17);
    assert_eq!(strconv.kinds["method"], 25);
    assert_eq!(strconv.kinds["fn"], 2);
    assert!(strconv.doc.starts_with("Crate strconv implements"));
}

/// Crate docs are reduced to plain text
#[test]
fn test_summarize_strips_html() {
    let services = create_test_services_from(MINIMAL_INDEX_JSON);
    let response = summarize(&services, Some("demo")).unwrap();

    assert_eq!(response.crates[0].doc, "Demo crate for tests.");
}
