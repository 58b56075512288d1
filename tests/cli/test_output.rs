//! Tests for CLI output helpers

use searchindex::cli::output::{strip_html, truncate};

/// Markup from index descriptions is removed
#[test]
fn test_strip_html_descriptions() {
    assert_eq!(
        strip_html("Calls <code>U::from(self)</code>."),
        "Calls U::from(self)."
    );
    assert_eq!(
        strip_html("<a href=\"x\">link</a> &amp; text"),
        "link & text"
    );
}

/// Quotes and apostrophes are decoded
#[test]
fn test_strip_html_quotes() {
    assert_eq!(strip_html("&quot;a&quot; &#39;b&#39;"), "\"a\" 'b'");
}

/// Truncation counts characters, not bytes
#[test]
fn test_truncate_unicode() {
    let text = "Indicates that a signed value is out of range for the …";
    assert_eq!(truncate(text, 100), text);

    let short = truncate("ééééééééééé", 5);
    assert_eq!(short, "éé...");
}
