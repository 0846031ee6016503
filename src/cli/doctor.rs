//! Doctor command implementation

use anyhow::Result;
use serde_json::{json, Value};

use super::output::print_data;
use super::Invocation;
use crate::capabilities::capabilities_for_mode;

pub fn run(invocation: &Invocation) -> Result<()> {
    let config = &invocation.config;
    let capabilities = capabilities_for_mode(config.mode);
    let docs = invocation.load_docs();

    let mut lines = vec![
        format!("mode={}", config.mode),
        format!("profile={}", config.profile),
        format!("configPath={}", config.config_path.display()),
        format!("projectConfigPath={}", config.project_config_path.display()),
        format!("pluginEndpoint={}", config.plugin_endpoint),
        format!("timeoutMs={}", config.timeout_ms),
        format!("dryRun={}", config.dry_run),
        format!(
            "sessionProfile={}",
            invocation.session.as_ref().and_then(|s| s.profile.as_deref()).unwrap_or("-")
        ),
    ];
    lines.extend(capabilities.entries().iter().map(|(name, on)| format!("capability.{name}={on}")));

    let catalog = match &docs {
        Some(docs) => {
            let consistency = docs.consistency();
            lines.push("catalogFound=true".to_string());
            lines.push(format!("catalogGroups={}", docs.groups.len()));
            lines.push(format!("catalogOperations={}", docs.catalog_operation_names.len()));
            lines.push(format!("catalogEntries={}", docs.entries.len()));
            if !consistency.missing_entries.is_empty() {
                lines.push(format!("missingEntries={}", consistency.missing_entries.join(",")));
            }
            if !consistency.uncataloged_entries.is_empty() {
                lines.push(format!(
                    "uncatalogedEntries={}",
                    consistency.uncataloged_entries.join(",")
                ));
            }
            json!({
                "found": true,
                "groups": docs.groups.len(),
                "operations": docs.catalog_operation_names.len(),
                "entries": docs.entries.len(),
                "consistency": consistency,
            })
        }
        None => {
            lines.push("catalogFound=false".to_string());
            let roots: Vec<String> =
                invocation.docs.roots().iter().map(|r| r.display().to_string()).collect();
            lines.push(format!("docsRoots={}", roots.join(",")));
            json!({ "found": false, "roots": roots })
        }
    };

    let payload: Value = json!({
        "mode": config.mode,
        "profile": config.profile,
        "configPath": config.config_path,
        "projectConfigPath": config.project_config_path,
        "pluginEndpoint": config.plugin_endpoint,
        "timeoutMs": config.timeout_ms,
        "dryRun": config.dry_run,
        "workingDirectory": invocation.env.cwd(),
        "session": invocation.session,
        "capabilities": capabilities,
        "catalog": catalog,
    });

    print_data(config.output_mode, &payload, &lines)
}
