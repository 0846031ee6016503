//! Catalog document grammar (`## ` groups and `- [`op`]` list items)

use crate::domain::OperationCatalogGroup;
use once_cell::sync::Lazy;
use regex::Regex;

/// Section excluded from the catalog; its list items are not operations.
pub const KNOWN_BEHAVIOR_NOTES: &str = "Known behavior notes";

static GROUP_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.+)$").expect("valid regex"));

static OPERATION_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- \[`([^`]+)`\]").expect("valid regex"));

/// Parse the catalog document into groups, in document order.
///
/// Lines before the first `## ` heading and inside the "Known behavior notes"
/// section are skipped, as is every line that is neither a heading nor a
/// linked operation item.
pub fn parse_catalog_groups(source: &str) -> Vec<OperationCatalogGroup> {
    let mut groups: Vec<OperationCatalogGroup> = Vec::new();
    // Index into `groups` of the section currently collecting operations.
    let mut current: Option<usize> = None;

    for line in source.lines() {
        if let Some(caps) = GROUP_HEADING.captures(line) {
            let heading = caps[1].trim();
            if heading == KNOWN_BEHAVIOR_NOTES {
                current = None;
                continue;
            }
            groups.push(OperationCatalogGroup::new(heading));
            current = Some(groups.len() - 1);
            continue;
        }

        let Some(index) = current else {
            continue;
        };

        if let Some(caps) = OPERATION_ITEM.captures(line) {
            groups[index].push_operation(&caps[1]);
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_collect_linked_operations() {
        let source = "\
# Operation catalog

Intro text.
- [`beforeAnyGroup`](#x)

## Documents

- [`doc.open`](./args#doc-open) opens a file
- [`doc.save`](./args#doc-save)
- [`doc.open`](./args#doc-open) duplicate
- plain bullet
  - [`nested`](#nested)

## Layers
- [`layer.create`](./args#layer-create)
";
        let groups = parse_catalog_groups(source);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Documents");
        assert_eq!(groups[0].operations, vec!["doc.open", "doc.save"]);
        assert_eq!(groups[1].name, "Layers");
        assert_eq!(groups[1].operations, vec!["layer.create"]);
    }

    #[test]
    fn known_behavior_notes_section_is_excluded() {
        let source = "\
## Group A
- [`opA`](#a)
## Known behavior notes
- [`ignored`](#ignored)
## Group B
- [`opB`](#b)
";
        let groups = parse_catalog_groups(source);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Group A", "Group B"]);
        assert!(groups.iter().all(|g| !g.operations.iter().any(|op| op == "ignored")));
    }

    #[test]
    fn deeper_headings_do_not_start_groups() {
        let source = "## Group\n### Detail\n- [`op`](#op)\n";
        let groups = parse_catalog_groups(source);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].operations, vec!["op"]);
    }

    #[test]
    fn heading_text_is_trimmed_and_crlf_is_accepted() {
        let source = "##   Spaced out   \r\n- [`op`](#op)\r\n";
        let groups = parse_catalog_groups(source);
        assert_eq!(groups[0].name, "Spaced out");
        assert_eq!(groups[0].operations, vec!["op"]);
    }

    #[test]
    fn item_label_must_be_a_single_backtick_token() {
        let source = "## G\n- [op](#op)\n- [`a` and `b`](#ab)\n* [`star`](#s)\n";
        let groups = parse_catalog_groups(source);
        assert!(groups[0].operations.is_empty());
    }

    #[test]
    fn empty_group_is_still_recorded() {
        let groups = parse_catalog_groups("## Empty\nnothing here\n");
        assert_eq!(groups.len(), 1);
        assert!(groups[0].operations.is_empty());
    }
}
