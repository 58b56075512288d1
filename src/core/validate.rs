//! Shape validation for loaded search indexes.
//!
//! Serde checks types; this module checks the cross-field invariants
//! the item resolver relies on: equal-length parallel sequences and
//! in-bounds references into the type path table.

use crate::core::error::{IndexError, Result};
use crate::core::types::{CrateEntry, SearchIndex, TypeRef};
use serde::{Deserialize, Serialize};

/// Validation result for one crate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Crate name
    pub crate_name: String,

    /// Number of items (length of `n`)
    pub items: usize,

    /// Size of the type path table
    pub type_paths: usize,

    /// Items carrying a function signature
    pub functions: usize,

    /// Human-readable problems; empty when consistent
    pub problems: Vec<String>,
}

impl ValidationReport {
    /// True when no problem was found
    pub fn is_consistent(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Inspect one crate entry and collect every problem found
pub fn inspect_entry(name: &str, entry: &CrateEntry) -> ValidationReport {
    let mut problems = Vec::new();
    let expected = entry.names.len();

    let lengths = [
        ("t", entry.kinds.len()),
        ("q", entry.paths.len()),
        ("d", entry.descriptions.len()),
        ("i", entry.parents.len()),
    ];
    for (field, len) in lengths {
        if len != expected {
            problems.push(format!(
                "sequence '{field}' has {len} entries, 'n' has {expected}"
            ));
        }
    }

    // `f` may be omitted entirely by older generators
    if !entry.functions.is_empty() && entry.functions.len() != expected {
        problems.push(format!(
            "sequence 'f' has {} entries, 'n' has {expected}",
            entry.functions.len()
        ));
    }

    let table_len = entry.type_paths.len();
    for (k, &parent) in entry.parents.iter().enumerate() {
        if parent as usize > table_len {
            problems.push(format!(
                "item {k} has parent {parent}, path table has {table_len} entries"
            ));
        }
    }

    let mut functions = 0;
    for (k, function) in entry.functions.iter().enumerate() {
        let Some(sig) = function.signature() else {
            continue;
        };
        functions += 1;
        if let Some(kind) = entry.kinds.get(k).filter(|kind| !kind.is_fn_like()) {
            problems.push(format!("item {k} is a {kind} but carries a signature"));
        }
        for ty in sig.all_types() {
            check_type(ty, k, table_len, &mut problems);
        }
    }

    ValidationReport {
        crate_name: name.to_string(),
        items: expected,
        type_paths: table_len,
        functions,
        problems,
    }
}

fn check_type(ty: &TypeRef, item: usize, table_len: usize, problems: &mut Vec<String>) {
    let id = ty.id();
    if id == 0 || id as usize > table_len {
        problems.push(format!(
            "item {item} references type {id}, path table has {table_len} entries"
        ));
    }
    for generic in ty.generics() {
        check_type(generic, item, table_len, problems);
    }
}

/// Validate one crate entry, failing on the first inconsistent report
pub fn validate_entry(name: &str, entry: &CrateEntry) -> Result<()> {
    let report = inspect_entry(name, entry);
    if report.is_consistent() {
        Ok(())
    } else {
        Err(IndexError::MalformedIndex(format!(
            "crate '{name}': {}",
            report.problems.join("; ")
        )))
    }
}

/// Validate every crate of an index
pub fn validate_index(index: &SearchIndex) -> Result<()> {
    for (name, entry) in index {
        validate_entry(name, entry)?;
    }
    Ok(())
}

/// Produce reports for every crate without failing
pub fn inspect_index(index: &SearchIndex) -> Vec<ValidationReport> {
    index
        .iter()
        .map(|(name, entry)| inspect_entry(name, entry))
        .collect()
}
