//! Ops command implementation

use anyhow::{bail, Result};
use clap::Subcommand;
use serde_json::json;

use super::output::print_data;
use super::Invocation;
use crate::docs::require_operation_help_docs;
use crate::domain::OperationHelpDocs;
use crate::error::PsagentError;
use crate::sources::DiskFiles;

#[derive(Subcommand)]
pub enum OpsCommand {
    /// List catalog groups and their operations
    List,

    /// Show arguments and an example for one operation
    Show {
        /// Operation name or alias
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Report operations missing from either reference document
    Check,
}

pub fn run(invocation: &Invocation, command: OpsCommand) -> Result<()> {
    let docs = require_operation_help_docs(&invocation.docs, &DiskFiles)?;
    match command {
        OpsCommand::List => list(invocation, &docs),
        OpsCommand::Show { name } => show(invocation, &docs, &name),
        OpsCommand::Check => check(invocation, &docs),
    }
}

fn list(invocation: &Invocation, docs: &OperationHelpDocs) -> Result<()> {
    let lines: Vec<String> = docs
        .groups
        .iter()
        .map(|group| format!("{}={}", group.name, group.operations.join(",")))
        .collect();
    print_data(invocation.config.output_mode, &json!({ "groups": docs.groups }), &lines)
}

fn show(invocation: &Invocation, docs: &OperationHelpDocs, name: &str) -> Result<()> {
    let Some(entry) = docs.resolve(name) else {
        return Err(PsagentError::UnknownOperation { name: name.to_string() }.into());
    };

    let mut lines = vec![
        format!("name={}", entry.name),
        format!("aliases={}", entry.aliases.join(",")),
        format!("required={}", entry.required),
        format!("supportedArgs={}", entry.supported_args),
        format!("cataloged={}", docs.is_cataloged(&entry.name)),
    ];
    if !entry.example.is_empty() {
        lines.push(format!("example={}", entry.example));
    }

    let payload = json!({ "entry": entry, "cataloged": docs.is_cataloged(&entry.name) });
    print_data(invocation.config.output_mode, &payload, &lines)
}

fn check(invocation: &Invocation, docs: &OperationHelpDocs) -> Result<()> {
    let report = docs.consistency();
    let mut lines: Vec<String> =
        report.missing_entries.iter().map(|name| format!("missingEntry={name}")).collect();
    lines.extend(report.uncataloged_entries.iter().map(|name| format!("uncatalogedEntry={name}")));
    if lines.is_empty() {
        lines.push("consistent=true".to_string());
    }
    print_data(invocation.config.output_mode, &report, &lines)?;

    if !report.is_consistent() {
        bail!(
            "Operation docs are inconsistent: {} missing entries, {} uncataloged entries",
            report.missing_entries.len(),
            report.uncataloged_entries.len()
        );
    }
    Ok(())
}
