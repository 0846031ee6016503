//! Shared CLI setup: resolve config and locate documents once per invocation.

use super::GlobalArgs;
use crate::config::{resolve_config_traced, CliOverrides, FieldSource};
use crate::docs::{load_operation_help_docs, DocsLocator};
use crate::domain::{OperationHelpDocs, ResolvedConfig};
use crate::session::{load_session, SessionState, SESSION_FILE_NAME};
use crate::sources::{DiskFiles, Environment};
use crate::utils::user_config_dir;

/// Everything a subcommand needs, built from the real process state.
pub struct Invocation {
    pub env: Environment,
    pub config: ResolvedConfig,
    pub trace: Vec<FieldSource>,
    pub session: Option<SessionState>,
    pub docs: DocsLocator,
}

impl Invocation {
    pub fn load_docs(&self) -> Option<OperationHelpDocs> {
        load_operation_help_docs(&self.docs, &DiskFiles)
    }
}

impl From<&GlobalArgs> for CliOverrides {
    fn from(args: &GlobalArgs) -> Self {
        CliOverrides {
            profile: args.profile.clone(),
            json: args.json,
            plain: args.plain,
            timeout: args.timeout.clone(),
            dry_run: args.dry_run,
            config: args.config.clone(),
        }
    }
}

pub fn build_invocation(args: &GlobalArgs) -> Invocation {
    let env = Environment::capture();
    let overrides = CliOverrides::from(args);

    // Session state lives next to the user config file.
    let session_dir = overrides
        .config
        .as_deref()
        .and_then(|path| path.parent())
        .map(|dir| env.cwd().join(dir))
        .unwrap_or_else(|| user_config_dir(&env));
    let session = load_session(&DiskFiles, &session_dir.join(SESSION_FILE_NAME));

    let (config, trace) = resolve_config_traced(&overrides, &env, session.as_ref(), &DiskFiles);
    let exe = std::env::current_exe().ok();
    let docs = DocsLocator::for_invocation(args.docs_root.as_deref(), &env, exe.as_deref());

    Invocation { env, config, trace, session, docs }
}
