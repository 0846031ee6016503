//! Arguments-and-examples document grammar (`### `op`` sections)

use crate::domain::{OperationHelpEntry, NO_OP_SPECIFIC_ARGS, REQUIRED_NONE};
use once_cell::sync::Lazy;
use regex::Regex;

pub const ALIASES_PREFIX: &str = "- Aliases: ";
pub const REQUIRED_PREFIX: &str = "- Required: ";
pub const SUPPORTED_ARGS_PREFIX: &str = "- Supported args: ";

static ENTRY_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^###\s+`([^`]+)`\s*$").expect("valid regex"));

static BACKTICK_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*([\s\S]*?)```").expect("valid regex"));

/// Parse every `### `name`` section into an entry, in document order.
///
/// A section runs from the end of its heading to the start of the next one.
/// Missing fields fall back to [`REQUIRED_NONE`], [`NO_OP_SPECIFIC_ARGS`], no
/// aliases and an empty example.
pub fn parse_operation_entries(source: &str) -> Vec<OperationHelpEntry> {
    let headings: Vec<_> = ENTRY_HEADING.captures_iter(source).collect();
    let mut entries = Vec::with_capacity(headings.len());

    for (index, caps) in headings.iter().enumerate() {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let section_end = headings
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(source.len(), |next| next.start());
        let section = &source[whole.end()..section_end];

        entries.push(OperationHelpEntry {
            name: name.as_str().to_string(),
            aliases: backtick_tokens(line_value(section, ALIASES_PREFIX)),
            required: line_value(section, REQUIRED_PREFIX).unwrap_or(REQUIRED_NONE).to_string(),
            supported_args: line_value(section, SUPPORTED_ARGS_PREFIX)
                .unwrap_or(NO_OP_SPECIFIC_ARGS)
                .to_string(),
            example: JSON_FENCE
                .captures(section)
                .and_then(|fence| fence.get(1))
                .map(|body| body.as_str().trim().to_string())
                .unwrap_or_default(),
        });
    }

    entries
}

/// Trimmed remainder of the first line starting with `prefix`.
fn line_value<'a>(section: &'a str, prefix: &str) -> Option<&'a str> {
    section.lines().find_map(|line| line.strip_prefix(prefix)).map(str::trim)
}

fn backtick_tokens(line: Option<&str>) -> Vec<String> {
    let Some(line) = line else {
        return Vec::new();
    };
    BACKTICK_TOKEN.captures_iter(line).map(|caps| caps[1].to_string()).collect()
}
