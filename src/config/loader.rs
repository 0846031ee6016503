//! Config file loading

use crate::sources::FileSource;
use crate::utils::decode_text;
use serde_json::{Map, Value};
use std::path::Path;

/// Values one JSON config file contributes. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub profile: Option<String>,
    pub plugin_endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
    pub dry_run: Option<bool>,
}

/// Read a JSON config file, best effort.
///
/// A missing, unreadable or unparsable file, or one whose top level is not an
/// object, yields an empty [`ConfigFile`]. Keys are read one at a time: a key
/// holding the wrong JSON type is dropped without discarding the others, and
/// unknown keys are ignored.
pub fn load_config_file(files: &dyn FileSource, path: &Path) -> ConfigFile {
    if !files.is_file(path) {
        tracing::debug!("Config file not present: {}", path.display());
        return ConfigFile::default();
    }

    let bytes = match files.read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed reading config file {}: {}", path.display(), e);
            return ConfigFile::default();
        }
    };

    let raw: Value = match serde_json::from_str(&decode_text(&bytes)) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring config file with invalid JSON {}: {}", path.display(), e);
            return ConfigFile::default();
        }
    };

    let Value::Object(map) = raw else {
        tracing::warn!("Ignoring config file {}: top level is not an object", path.display());
        return ConfigFile::default();
    };

    let parsed = parse_config_object(&map);
    tracing::debug!("Loaded config file {}: {:?}", path.display(), parsed);
    parsed
}

fn parse_config_object(map: &Map<String, Value>) -> ConfigFile {
    ConfigFile {
        profile: string_key(map, "profile"),
        plugin_endpoint: string_key(map, "pluginEndpoint"),
        timeout_ms: map.get("timeoutMs").and_then(timeout_value),
        // Only a literal `true` enables dry run; other values are ignored.
        dry_run: map.get("dryRun").and_then(Value::as_bool),
    }
}

fn string_key(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            tracing::debug!("Ignoring non-string config key '{}': {}", key, other);
            None
        }
        None => None,
    }
}

/// Accept finite numbers of at least one millisecond; fractions are truncated.
fn timeout_value(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    let n = value.as_f64()?;
    if n.is_finite() && n >= 1.0 && n < u64::MAX as f64 {
        Some(n.trunc() as u64)
    } else {
        None
    }
}
