//! Configuration loading and merging
//!
//! Merges CLI flags, environment variables, session state, the project config
//! file and the user config file into one [`ResolvedConfig`] with a fixed
//! per-field precedence. Resolution never fails: unreadable or malformed
//! sources fall through to the next source and finally to the defaults.
//!
//! [`ResolvedConfig`]: crate::domain::ResolvedConfig

pub mod loader;
pub mod parse;
pub mod resolve;

pub use loader::{load_config_file, ConfigFile};
pub use resolve::{
    resolve_config, resolve_config_traced, CliOverrides, ConfigSource, FieldSource,
    DEFAULT_PLUGIN_ENDPOINT, DEFAULT_PROFILE, DEFAULT_TIMEOUT_MS, ENV_DRY_RUN,
    ENV_PLUGIN_ENDPOINT, ENV_PROFILE, ENV_TIMEOUT_MS, PROJECT_CONFIG_FILE_NAME,
    USER_CONFIG_FILE_NAME,
};
