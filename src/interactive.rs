//! Interactive overwrite confirmation
//!
//! The only prompt in the tool: before updating an existing remote
//! record, show what would change and ask for a yes/no. Everything else
//! is driven by flags so scripted runs never block.

use std::fmt::Write as _;
use std::io;

use dialoguer::Confirm;
use similar::{ChangeTag, TextDiff};

use dsctl::sync::wire::RemoteDatasource;

/// Ask whether the existing remote record should be overwritten.
///
/// Prints a unified diff of the remote record against the locally
/// assembled one, then prompts. Defaults to no.
///
/// # Errors
///
/// Returns an error when the terminal cannot be read.
pub fn confirm_overwrite(
    id: &str,
    local: &RemoteDatasource,
    existing: &RemoteDatasource,
) -> io::Result<bool> {
    println!("\n⚠ Datasource '{id}' already exists");

    match diff_records(existing, local) {
        Some(diff) => println!("\n{diff}"),
        None => println!("The local configuration is identical to the remote record."),
    }

    Confirm::new()
        .with_prompt("Overwrite the existing configuration?")
        .default(false)
        .interact()
        .map_err(io::Error::other)
}

/// Unified diff of two wire records as pretty JSON, or `None` when they
/// are identical.
fn diff_records(existing: &RemoteDatasource, local: &RemoteDatasource) -> Option<String> {
    let existing_json = to_pretty_json(existing);
    let local_json = to_pretty_json(local);

    if existing_json == local_json {
        return None;
    }

    const DIFF_CONTEXT_LINES: usize = 3;
    let diff = TextDiff::from_lines(&existing_json, &local_json);

    let mut output = String::new();
    output.push_str("--- remote (current)\n");
    output.push_str("+++ local (new)\n");

    for (idx, group) in diff.grouped_ops(DIFF_CONTEXT_LINES).iter().enumerate() {
        if idx > 0 {
            output.push_str("...\n");
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };

                let newline = if change.value().ends_with('\n') { "" } else { "\n" };
                write!(output, "{sign}{}{newline}", change.value())
                    .expect("Writing to String should never fail");
            }
        }
    }

    Some(output)
}

fn to_pretty_json(record: &RemoteDatasource) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| "<unserializable>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_identical_records_is_none() {
        let record = RemoteDatasource {
            name: "my-app".to_string(),
            ..RemoteDatasource::default()
        };
        assert!(diff_records(&record, &record).is_none());
    }

    #[test]
    fn test_diff_marks_changed_lines() {
        let existing = RemoteDatasource {
            name: "my-app".to_string(),
            display_name: Some("Old Name".to_string()),
            ..RemoteDatasource::default()
        };
        let local = RemoteDatasource {
            name: "my-app".to_string(),
            display_name: Some("New Name".to_string()),
            ..RemoteDatasource::default()
        };

        let diff = diff_records(&existing, &local).unwrap();
        assert!(diff.contains("-  \"displayName\": \"Old Name\""));
        assert!(diff.contains("+  \"displayName\": \"New Name\""));
    }
}
