//! Loading both reference documents into one catalog

use super::catalog::parse_catalog_groups;
use super::entries::parse_operation_entries;
use super::locate::{DocsLocator, OPERATION_ARGUMENTS_DOC, OPERATION_CATALOG_DOC};
use crate::domain::OperationHelpDocs;
use crate::error::PsagentError;
use crate::sources::FileSource;
use crate::utils::decode_text;
use std::path::Path;

/// Locate, read and parse both documents.
///
/// Returns `None` when either document is missing from every candidate path
/// or cannot be read; a partial catalog is never produced.
pub fn load_operation_help_docs(
    locator: &DocsLocator,
    files: &dyn FileSource,
) -> Option<OperationHelpDocs> {
    let catalog_path = locator.locate(OPERATION_CATALOG_DOC, files)?;
    let arguments_path = locator.locate(OPERATION_ARGUMENTS_DOC, files)?;

    let catalog_source = read_document(files, &catalog_path)?;
    let arguments_source = read_document(files, &arguments_path)?;

    let groups = parse_catalog_groups(&catalog_source);
    let entries = parse_operation_entries(&arguments_source);
    tracing::debug!(
        "Parsed {} groups from {} and {} entries from {}",
        groups.len(),
        catalog_path.display(),
        entries.len(),
        arguments_path.display()
    );

    Some(OperationHelpDocs::new(groups, entries))
}

/// Same as [`load_operation_help_docs`], but reports the searched paths on failure.
pub fn require_operation_help_docs(
    locator: &DocsLocator,
    files: &dyn FileSource,
) -> Result<OperationHelpDocs, PsagentError> {
    load_operation_help_docs(locator, files).ok_or_else(|| {
        let mut searched = locator.candidates(OPERATION_CATALOG_DOC);
        searched.extend(locator.candidates(OPERATION_ARGUMENTS_DOC));
        PsagentError::CatalogUnavailable { searched }
    })
}

fn read_document(files: &dyn FileSource, path: &Path) -> Option<String> {
    match files.read(path) {
        Ok(bytes) => Some(decode_text(&bytes)),
        Err(e) => {
            tracing::warn!("Failed reading reference document {}: {}", path.display(), e);
            None
        }
    }
}
