//! Precedence merge of all configuration sources

use super::loader::{load_config_file, ConfigFile};
use super::parse::{non_blank, parse_positive_int, parse_truthy};
use crate::domain::{AdapterMode, OutputMode, ResolvedConfig};
use crate::session::SessionState;
use crate::sources::{Environment, FileSource};
use crate::utils::user_config_dir;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub const ENV_PROFILE: &str = "PSAGENT_PROFILE";
pub const ENV_TIMEOUT_MS: &str = "PSAGENT_TIMEOUT_MS";
pub const ENV_PLUGIN_ENDPOINT: &str = "PSAGENT_PLUGIN_ENDPOINT";
pub const ENV_DRY_RUN: &str = "PSAGENT_DRY_RUN";

pub const PROJECT_CONFIG_FILE_NAME: &str = ".psagent.json";
pub const USER_CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_PLUGIN_ENDPOINT: &str = "http://127.0.0.1:43120";

/// Options taken from the command line. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub profile: Option<String>,
    pub json: bool,
    pub plain: bool,
    /// Raw `--timeout` text; parsed with the same rule as the env variable.
    pub timeout: Option<String>,
    pub dry_run: bool,
    /// Replaces the default user config path.
    pub config: Option<PathBuf>,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Cli,
    Env,
    Session,
    Project,
    User,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigSource::Cli => "cli",
            ConfigSource::Env => "env",
            ConfigSource::Session => "session",
            ConfigSource::Project => "project",
            ConfigSource::User => "user",
            ConfigSource::Default => "default",
        };
        f.write_str(name)
    }
}

/// One provenance record: `field` was taken from `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSource {
    pub field: &'static str,
    pub source: ConfigSource,
}

/// Resolve the runtime configuration.
///
/// Per-field precedence, highest first:
/// - `profile`: CLI > env > session > project file > user file > `"default"`
/// - `outputMode`: `--json` > `--plain` > `human`
/// - `timeoutMs`: CLI > env > project file > user file > `15000`, where a
///   source only counts if it yields a positive integer
/// - `pluginEndpoint`: env > project file > user file > default endpoint
/// - `dryRun`: logical OR of CLI, env, project file and user file
pub fn resolve_config(
    cli: &CliOverrides,
    env: &Environment,
    session: Option<&SessionState>,
    files: &dyn FileSource,
) -> ResolvedConfig {
    resolve_config_traced(cli, env, session, files).0
}

/// Like [`resolve_config`], also returning which source supplied each field.
pub fn resolve_config_traced(
    cli: &CliOverrides,
    env: &Environment,
    session: Option<&SessionState>,
    files: &dyn FileSource,
) -> (ResolvedConfig, Vec<FieldSource>) {
    // A relative --config is taken from the snapshot's working directory.
    let config_path = cli
        .config
        .as_ref()
        .map(|path| env.cwd().join(path))
        .unwrap_or_else(|| user_config_dir(env).join(USER_CONFIG_FILE_NAME));
    let project_config_path = env.cwd().join(PROJECT_CONFIG_FILE_NAME);

    let user = load_config_file(files, &config_path);
    let project = load_config_file(files, &project_config_path);

    let mut trace = Vec::with_capacity(6);

    trace.push(FieldSource { field: "mode", source: ConfigSource::Default });
    let mode = AdapterMode::Desktop;

    let (profile, source) = first_of(
        [
            (ConfigSource::Cli, non_blank(cli.profile.as_deref())),
            (ConfigSource::Env, non_blank(env.var(ENV_PROFILE))),
            (ConfigSource::Session, non_blank(session.and_then(|s| s.profile.as_deref()))),
            (ConfigSource::Project, non_blank(project.profile.as_deref())),
            (ConfigSource::User, non_blank(user.profile.as_deref())),
        ],
        DEFAULT_PROFILE,
    );
    let profile = profile.to_string();
    trace.push(FieldSource { field: "profile", source });

    let (output_mode, source) = if cli.json {
        (OutputMode::Json, ConfigSource::Cli)
    } else if cli.plain {
        (OutputMode::Plain, ConfigSource::Cli)
    } else {
        (OutputMode::Human, ConfigSource::Default)
    };
    trace.push(FieldSource { field: "outputMode", source });

    let (timeout_ms, source) = first_of(
        [
            (ConfigSource::Cli, parse_positive_int(cli.timeout.as_deref())),
            (ConfigSource::Env, parse_positive_int(env.var(ENV_TIMEOUT_MS))),
            (ConfigSource::Project, project.timeout_ms),
            (ConfigSource::User, user.timeout_ms),
        ],
        DEFAULT_TIMEOUT_MS,
    );
    trace.push(FieldSource { field: "timeoutMs", source });

    let (plugin_endpoint, source) = first_of(
        [
            (ConfigSource::Env, non_blank(env.var(ENV_PLUGIN_ENDPOINT))),
            (ConfigSource::Project, non_blank(project.plugin_endpoint.as_deref())),
            (ConfigSource::User, non_blank(user.plugin_endpoint.as_deref())),
        ],
        DEFAULT_PLUGIN_ENDPOINT,
    );
    let plugin_endpoint = plugin_endpoint.to_string();
    trace.push(FieldSource { field: "pluginEndpoint", source });

    let (dry_run, source) = dry_run_of(cli, env, &project, &user);
    trace.push(FieldSource { field: "dryRun", source });

    let config = ResolvedConfig {
        mode,
        profile,
        output_mode,
        timeout_ms,
        plugin_endpoint,
        dry_run,
        config_path,
        project_config_path,
    };
    tracing::debug!("Resolved config: {:?}", config);
    (config, trace)
}

/// First source holding a value, else the default.
fn first_of<T, const N: usize>(
    candidates: [(ConfigSource, Option<T>); N],
    default: T,
) -> (T, ConfigSource) {
    candidates
        .into_iter()
        .find_map(|(source, value)| value.map(|v| (v, source)))
        .unwrap_or((default, ConfigSource::Default))
}

fn dry_run_of(
    cli: &CliOverrides,
    env: &Environment,
    project: &ConfigFile,
    user: &ConfigFile,
) -> (bool, ConfigSource) {
    let votes = [
        (ConfigSource::Cli, cli.dry_run),
        (ConfigSource::Env, parse_truthy(env.var(ENV_DRY_RUN))),
        (ConfigSource::Project, project.dry_run == Some(true)),
        (ConfigSource::User, user.dry_run == Some(true)),
    ];
    votes
        .into_iter()
        .find(|(_, enabled)| *enabled)
        .map(|(source, _)| (true, source))
        .unwrap_or((false, ConfigSource::Default))
}
