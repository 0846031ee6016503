//! Operation catalog types parsed from the reference documents

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Text used for `required` when a section has no `- Required: ` line.
pub const REQUIRED_NONE: &str = "None";

/// Text used for `supported_args` when a section has no `- Supported args: ` line.
pub const NO_OP_SPECIFIC_ARGS: &str = "No op-specific args";

/// One `## ` section of the operation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationCatalogGroup {
    pub name: String,
    /// Operation names in first-seen order, without duplicates.
    pub operations: Vec<String>,
}

impl OperationCatalogGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), operations: Vec::new() }
    }

    /// Append `operation` unless the group already lists it.
    pub fn push_operation(&mut self, operation: &str) {
        if !self.operations.iter().any(|existing| existing == operation) {
            self.operations.push(operation.to_string());
        }
    }
}

/// Argument and example reference for one operation (`### ` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationHelpEntry {
    pub name: String,
    pub aliases: Vec<String>,
    pub required: String,
    pub supported_args: String,
    pub example: String,
}

/// Combined view over both reference documents.
///
/// `by_name` is derived from `entries` (last definition of a name wins) and
/// `catalog_operation_names` from `groups`. The two are not cross-checked on
/// load; see [`OperationHelpDocs::consistency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationHelpDocs {
    pub groups: Vec<OperationCatalogGroup>,
    pub entries: Vec<OperationHelpEntry>,
    #[serde(skip)]
    pub by_name: BTreeMap<String, OperationHelpEntry>,
    pub catalog_operation_names: BTreeSet<String>,
}

impl OperationHelpDocs {
    /// Assemble the catalog from parsed groups and entries.
    pub fn new(groups: Vec<OperationCatalogGroup>, entries: Vec<OperationHelpEntry>) -> Self {
        let mut by_name = BTreeMap::new();
        for entry in &entries {
            by_name.insert(entry.name.clone(), entry.clone());
        }

        let catalog_operation_names = groups
            .iter()
            .flat_map(|group| group.operations.iter().cloned())
            .collect::<BTreeSet<_>>();

        Self { groups, entries, by_name, catalog_operation_names }
    }

    /// Exact lookup by operation name.
    pub fn entry(&self, name: &str) -> Option<&OperationHelpEntry> {
        self.by_name.get(name)
    }

    /// Look up by name, falling back to the first entry declaring `token` as an alias.
    pub fn resolve(&self, token: &str) -> Option<&OperationHelpEntry> {
        if let Some(entry) = self.entry(token) {
            return Some(entry);
        }
        self.entries.iter().find(|entry| entry.aliases.iter().any(|alias| alias == token))
    }

    /// Whether the catalog document lists `name` in any group.
    pub fn is_cataloged(&self, name: &str) -> bool {
        self.catalog_operation_names.contains(name)
    }

    /// Compare catalog names against documented entries.
    pub fn consistency(&self) -> CatalogConsistency {
        let missing_entries = self
            .catalog_operation_names
            .iter()
            .filter(|name| !self.by_name.contains_key(name.as_str()))
            .cloned()
            .collect();
        let uncataloged_entries = self
            .by_name
            .keys()
            .filter(|name| !self.catalog_operation_names.contains(name.as_str()))
            .cloned()
            .collect();
        CatalogConsistency { missing_entries, uncataloged_entries }
    }
}

/// Mismatches between the catalog document and the arguments document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConsistency {
    /// Cataloged operations with no `### ` entry.
    pub missing_entries: Vec<String>,
    /// Entries whose operation never appears in a catalog group.
    pub uncataloged_entries: Vec<String>,
}

impl CatalogConsistency {
    pub fn is_consistent(&self) -> bool {
        self.missing_entries.is_empty() && self.uncataloged_entries.is_empty()
    }
}
