//! Config command implementation

use anyhow::Result;
use clap::Subcommand;
use serde_json::json;

use super::output::print_data;
use super::Invocation;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show {
        /// Also show which source supplied each value
        #[arg(long)]
        explain: bool,
    },
}

pub fn run(invocation: &Invocation, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show { explain } => show(invocation, explain),
    }
}

fn show(invocation: &Invocation, explain: bool) -> Result<()> {
    let config = &invocation.config;
    let mut lines = vec![
        format!("mode={}", config.mode),
        format!("profile={}", config.profile),
        format!("outputMode={}", config.output_mode),
        format!("timeoutMs={}", config.timeout_ms),
        format!("pluginEndpoint={}", config.plugin_endpoint),
        format!("dryRun={}", config.dry_run),
        format!("configPath={}", config.config_path.display()),
        format!("projectConfigPath={}", config.project_config_path.display()),
    ];

    let payload = if explain {
        lines.extend(
            invocation.trace.iter().map(|entry| format!("source.{}={}", entry.field, entry.source)),
        );
        json!({ "config": config, "sources": invocation.trace })
    } else {
        json!(config)
    };

    print_data(config.output_mode, &payload, &lines)
}
