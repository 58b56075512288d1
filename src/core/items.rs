//! Per-item views over a crate entry.
//!
//! Joins the parallel sequences of a [`CrateEntry`] into [`Item`]s,
//! resolving carried-forward paths and parent references, and renders
//! function signatures through the type path table.

use crate::core::types::{CrateEntry, FunctionSignature, ItemKind, TypeList, TypePath, TypeRef};
use std::collections::BTreeMap;

/// One documented item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'a> {
    /// Position in the parallel sequences
    pub index: usize,
    pub kind: ItemKind,
    pub name: &'a str,
    /// Module path, already resolved from the carried-forward encoding
    pub path: &'a str,
    pub description: &'a str,
    pub parent: Option<&'a TypePath>,
    pub signature: Option<&'a FunctionSignature>,
}

impl Item<'_> {
    /// Fully qualified name, including the parent type when there is one
    pub fn full_path(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if !self.path.is_empty() {
            parts.push(self.path);
        }
        if let Some(parent) = self.parent {
            parts.push(parent.name());
        }
        parts.push(self.name);
        parts.join("::")
    }
}

/// Iterator over the items of a crate entry
#[derive(Debug, Clone)]
pub struct Items<'a> {
    entry: &'a CrateEntry,
    next: usize,
    current_path: &'a str,
}

impl<'a> Iterator for Items<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entry;
        let k = self.next;
        let name = entry.names.get(k)?;
        let kind = *entry.kinds.get(k)?;
        self.next += 1;

        if let Some(path) = entry.paths.get(k).filter(|p| !p.is_empty()) {
            self.current_path = path.as_str();
        }

        let parent = match entry.parents.get(k).copied().unwrap_or(0) {
            0 => None,
            id => entry.type_path(id),
        };

        Some(Item {
            index: k,
            kind,
            name,
            path: self.current_path,
            description: entry.descriptions.get(k).map_or("", String::as_str),
            parent,
            signature: entry.functions.get(k).and_then(|f| f.signature()),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entry.len().saturating_sub(self.next);
        (0, Some(remaining))
    }
}

impl CrateEntry {
    /// Iterate over resolved items in index order
    pub fn items(&self) -> Items<'_> {
        Items {
            entry: self,
            next: 0,
            current_path: "",
        }
    }

    /// Number of items per kind
    pub fn kind_counts(&self) -> BTreeMap<ItemKind, usize> {
        let mut counts = BTreeMap::new();
        for kind in &self.kinds {
            *counts.entry(*kind).or_insert(0) += 1;
        }
        counts
    }

    /// Render a signature as `(A, B) -> R`
    pub fn render_signature(&self, sig: &FunctionSignature) -> String {
        let inputs = self.render_list(&sig.inputs);
        match &sig.output {
            Some(output) if !output.is_empty() => {
                let rendered = if output.len() == 1 {
                    self.render_type(&output.types()[0])
                } else {
                    format!("({})", self.render_list(output))
                };
                format!("({inputs}) -> {rendered}")
            }
            _ => format!("({inputs})"),
        }
    }

    fn render_list(&self, list: &TypeList) -> String {
        list.types()
            .iter()
            .map(|ty| self.render_type(ty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn render_type(&self, ty: &TypeRef) -> String {
        let name = self.type_path(ty.id()).map_or("?", TypePath::name);
        let generics = ty.generics();
        if generics.is_empty() {
            return name.to_string();
        }

        let args: Vec<String> = generics.iter().map(|g| self.render_type(g)).collect();
        format!("{name}<{}>", args.join(", "))
    }
}
