//! psagent: configuration resolution and operation catalog for a host-application automation CLI
//!
//! The library exposes the two leaf subsystems the command-line front end is
//! built on: [`config::resolve_config`], which merges CLI flags, environment
//! variables, session state and JSON config files into one [`ResolvedConfig`],
//! and [`docs::load_operation_help_docs`], which parses the operation reference
//! documents into an [`OperationHelpDocs`] catalog.

pub mod capabilities;
pub mod cli;
pub mod config;
pub mod docs;
pub mod domain;
pub mod error;
pub mod session;
pub mod sources;
pub mod utils;

pub use domain::{
    AdapterMode, CatalogConsistency, OperationCatalogGroup, OperationHelpDocs, OperationHelpEntry,
    OutputMode, ResolvedConfig,
};
pub use error::PsagentError;
