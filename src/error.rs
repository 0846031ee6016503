//! Typed errors surfaced to callers of the library

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PsagentError {
    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    /// One or both reference documents were not found at any searched path.
    #[error("Operation reference documents not found (searched {} paths)", .searched.len())]
    CatalogUnavailable { searched: Vec<PathBuf> },
}
