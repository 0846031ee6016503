//! Resolved runtime configuration

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Adapter transport the runtime talks to. Only the desktop plugin exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterMode {
    #[default]
    Desktop,
}

impl AdapterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterMode::Desktop => "desktop",
        }
    }
}

impl fmt::Display for AdapterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Json,
    Plain,
    #[default]
    Human,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Json => "json",
            OutputMode::Plain => "plain",
            OutputMode::Human => "human",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully merged configuration for one process invocation.
///
/// Every field carries a concrete value; a source that is absent contributes its
/// documented default instead of leaving a hole. Built once by
/// [`crate::config::resolve_config`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub mode: AdapterMode,
    pub profile: String,
    pub output_mode: OutputMode,
    pub timeout_ms: u64,
    pub plugin_endpoint: String,
    pub dry_run: bool,
    /// User config file the values were read from (diagnostics only).
    pub config_path: PathBuf,
    /// Project config file the values were read from (diagnostics only).
    pub project_config_path: PathBuf,
}
