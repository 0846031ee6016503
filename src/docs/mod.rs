//! Operation reference documents
//!
//! Two Markdown/MDX documents under `docs/reference/` describe the operations
//! the agent knows about:
//!
//! - `operation-catalog`: `## ` group headings, each followed by list items of
//!   the form ``- [`name`](link)``.
//! - `operation-arguments-and-examples`: one ``### `name` `` section per
//!   operation with `- Aliases: `, `- Required: `, `- Supported args: ` lines
//!   and a fenced `json` example.
//!
//! Both grammars skip anything they do not recognise. The loader returns
//! `None` unless both documents are found.

pub mod catalog;
pub mod entries;
pub mod loader;
pub mod locate;

pub use catalog::parse_catalog_groups;
pub use entries::parse_operation_entries;
pub use loader::{load_operation_help_docs, require_operation_help_docs};
pub use locate::{DocsLocator, OPERATION_ARGUMENTS_DOC, OPERATION_CATALOG_DOC};
