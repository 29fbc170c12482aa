pub mod insights;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Forward adjacency of a mapped project: file identity to the identities
/// it imports.
///
/// Keys are kept sorted so two runs over the same tree serialize to
/// byte-identical JSON; each value preserves source import order. The
/// serialized form is the bare object `{"file": ["dep", ...], ...}` with
/// no wrapper fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DependencyGraph {
    files: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `file` a node even if it never gains a dependency.
    pub fn ensure_node(&mut self, file: &str) {
        self.files.entry(file.to_string()).or_default();
    }

    /// Record one edge. Duplicates and self-references are dropped here so
    /// no caller can introduce them.
    pub fn add_dependency(&mut self, file: &str, dependency: &str) {
        if file == dependency {
            return;
        }
        let deps = self.files.entry(file.to_string()).or_default();
        if !deps.iter().any(|d| d == dependency) {
            deps.push(dependency.to_string());
        }
    }

    pub fn contains(&self, file: &str) -> bool {
        self.files.contains_key(file)
    }

    /// Direct dependencies in source import order; `None` for files the
    /// map has never seen.
    pub fn dependencies_of(&self, file: &str) -> Option<&[String]> {
        self.files.get(file).map(Vec::as_slice)
    }

    /// Files that import `file`, sorted. Derived from the forward map on
    /// every call, so the two views cannot drift apart.
    pub fn dependents_of(&self, file: &str) -> Vec<String> {
        self.files
            .iter()
            .filter(|(_, deps)| deps.iter().any(|d| d == file))
            .map(|(f, _)| f.clone())
            .collect()
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn edge_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
