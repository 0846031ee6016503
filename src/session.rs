//! Session state consumed by config resolution

use crate::sources::FileSource;
use crate::utils::decode_text;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the session state, stored next to the user config.
pub const SESSION_FILE_NAME: &str = "session.json";

/// State left behind by a previous invocation. Only `profile` feeds resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub profile: Option<String>,
}

/// Read the session file if present. Missing or malformed files yield `None`.
pub fn load_session(files: &dyn FileSource, path: &Path) -> Option<SessionState> {
    if !files.is_file(path) {
        tracing::debug!("No session state at {}", path.display());
        return None;
    }
    let bytes = match files.read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed reading session state {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str::<SessionState>(&decode_text(&bytes)) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::warn!("Ignoring malformed session state {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MemoryFiles;

    #[test]
    fn reads_profile_from_session_file() {
        let files = MemoryFiles::new().with_file("/s.json", r#"{"profile":"retouch","docId":"x"}"#);
        let state = load_session(&files, Path::new("/s.json")).expect("session");
        assert_eq!(state.profile.as_deref(), Some("retouch"));
    }

    #[test]
    fn malformed_or_missing_session_is_none() {
        let files = MemoryFiles::new().with_file("/s.json", "{not json");
        assert!(load_session(&files, Path::new("/s.json")).is_none());
        assert!(load_session(&files, Path::new("/missing.json")).is_none());
    }
}
