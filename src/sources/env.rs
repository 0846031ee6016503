//! Environment snapshot

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Immutable copy of environment variables plus the working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
    cwd: PathBuf,
}

impl Environment {
    /// Empty environment rooted at `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { vars: BTreeMap::new(), cwd: cwd.into() }
    }

    /// Snapshot the current process. Variables that are not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        let cwd = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                tracing::warn!("Cannot determine working directory, using '.': {}", e);
                PathBuf::from(".")
            }
        };
        Self { vars, cwd }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// `HOME`, falling back to `USERPROFILE`; empty values are ignored.
    pub fn home_dir(&self) -> Option<PathBuf> {
        ["HOME", "USERPROFILE"]
            .iter()
            .filter_map(|key| self.var(key))
            .find(|value| !value.trim().is_empty())
            .map(PathBuf::from)
    }
}
