//! Path helpers

use crate::sources::Environment;
use std::collections::HashSet;
use std::path::PathBuf;

/// Directory holding the user-global config (`<home>/.config/psagent`).
///
/// Falls back to the working directory when no home directory is known.
pub fn user_config_dir(env: &Environment) -> PathBuf {
    let base = env.home_dir().unwrap_or_else(|| env.cwd().to_path_buf());
    base.join(".config").join("psagent")
}

/// Drop repeated paths, keeping the first occurrence.
pub fn dedupe_paths(paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths.into_iter().filter(|path| seen.insert(path.clone())).collect()
}
