//! Process state handed to the resolver and the docs loader.
//!
//! Neither subsystem reads ambient environment or filesystem state directly;
//! they take an [`Environment`] snapshot and a [`FileSource`] so tests can run
//! in isolation.

pub mod env;
pub mod files;

pub use env::Environment;
pub use files::{DiskFiles, FileSource, MemoryFiles};
