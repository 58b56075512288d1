// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some suites but are used in others
#[allow(unused_imports)]
pub use fixtures::{BROKEN_INDEX_JSON, MINIMAL_INDEX_JSON};
#[allow(unused_imports)]
pub use helpers::{create_test_services, create_test_services_from, write_index_file};
