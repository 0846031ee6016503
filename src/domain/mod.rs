//! Core value types shared by the resolver, the docs loader and the CLI.

pub mod catalog;
pub mod config;

pub use catalog::{
    CatalogConsistency, OperationCatalogGroup, OperationHelpDocs, OperationHelpEntry,
    NO_OP_SPECIFIC_ARGS, REQUIRED_NONE,
};
pub use config::{AdapterMode, OutputMode, ResolvedConfig};
