//! Reference document location

use crate::sources::{Environment, FileSource};
use crate::utils::dedupe_paths;
use std::path::{Path, PathBuf};

/// Env var naming an extra documentation root, probed after `--docs-root`.
pub const ENV_DOCS_ROOT: &str = "PSAGENT_DOCS_ROOT";

/// File stem of the group/heading catalog document.
pub const OPERATION_CATALOG_DOC: &str = "operation-catalog";

/// File stem of the per-operation arguments and examples document.
pub const OPERATION_ARGUMENTS_DOC: &str = "operation-arguments-and-examples";

/// Extensions tried for each document, in order.
pub const DOC_EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Ordered set of documentation roots. Documents live under `<root>/docs/reference/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsLocator {
    roots: Vec<PathBuf>,
}

impl DocsLocator {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self { roots: dedupe_paths(roots) }
    }

    /// Root list used by the CLI.
    ///
    /// Order: explicit root, `PSAGENT_DOCS_ROOT`, working directory, then the
    /// parent and grandparent of the executable's directory. The last two cover
    /// running from a build tree and from an install prefix.
    pub fn for_invocation(explicit: Option<&Path>, env: &Environment, exe: Option<&Path>) -> Self {
        let mut roots = Vec::new();
        if let Some(root) = explicit {
            roots.push(env.cwd().join(root));
        }
        if let Some(root) = env.var(ENV_DOCS_ROOT).filter(|v| !v.trim().is_empty()) {
            roots.push(env.cwd().join(root));
        }
        roots.push(env.cwd().to_path_buf());
        if let Some(exe_dir) = exe.and_then(Path::parent) {
            roots.extend(exe_dir.ancestors().skip(1).take(2).map(Path::to_path_buf));
        }
        Self::new(roots)
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Every path probed for the document `stem`, in probe order.
    pub fn candidates(&self, stem: &str) -> Vec<PathBuf> {
        let paths = self.roots.iter().flat_map(|root| {
            DOC_EXTENSIONS
                .iter()
                .map(move |ext| root.join("docs").join("reference").join(format!("{stem}.{ext}")))
        });
        dedupe_paths(paths)
    }

    /// First candidate that exists as a file.
    pub fn locate(&self, stem: &str, files: &dyn FileSource) -> Option<PathBuf> {
        let found = self.candidates(stem).into_iter().find(|candidate| files.is_file(candidate));
        match &found {
            Some(path) => tracing::debug!("Located {} at {}", stem, path.display()),
            None => tracing::debug!("{} not found under {} roots", stem, self.roots.len()),
        }
        found
    }
}
