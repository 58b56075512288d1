// Test fixtures: small hand-written search indexes

/// One crate with a struct, a method and a free function
#[allow(dead_code)] // Used in integration tests
pub const MINIMAL_INDEX_JSON: &str = r#"{
  "demo": {
    "doc": "Demo crate for <code>tests</code>.",
    "t": [3, 11, 5],
    "n": ["Config", "parse", "load"],
    "q": ["demo", "", ""],
    "d": ["Settings &amp; flags", "", "Load a <code>Config</code>"],
    "i": [0, 1, 0],
    "f": [0, [[2], 1], [[], [[3, [1]]]]],
    "p": [[3, "Config"], [15, "str"], [4, "Option"]]
  }
}"#;

/// Parallel sequences of different lengths and a dangling parent
#[allow(dead_code)] // Used in integration tests
pub const BROKEN_INDEX_JSON: &str = r#"{
  "demo": {
    "doc": "",
    "t": [3, 11],
    "n": ["Config"],
    "q": ["demo"],
    "d": [""],
    "i": [4],
    "p": [[3, "Config"]]
  }
}"#;
