//! Plain-text summaries for command output

use crate::config::{Assembled, DatasourceConfig};
use crate::export::ExportManifest;
use crate::sync::wire::RemoteDatasource;

/// Render the summary of an assembled configuration shown before a push.
#[must_use]
pub fn config_summary(assembled: &Assembled) -> String {
    let config = &assembled.config;
    let mut output = String::new();

    output.push_str("=== Configuration Summary ===\n");
    push_row(&mut output, "Display Name", &config.display_name);
    push_row(&mut output, "Datasource ID", &config.id);
    push_row(&mut output, "Category", config.category.as_tag());
    push_row(&mut output, "Home URL", &config.home_url);
    push_row(&mut output, "URL Regex", &config.url_regex);
    push_row(&mut output, "Suggestion Text", &config.suggestion_text);
    push_row(
        &mut output,
        "User Reference",
        if config.user_referenced_by_email {
            "by email"
        } else {
            "by ID (not email)"
        },
    );
    push_row(
        &mut output,
        "Test Mode",
        if config.is_test_mode {
            "yes - visible to test users only"
        } else {
            "no - live"
        },
    );
    push_row(
        &mut output,
        "Light Mode Icon",
        &truncate(&config.icon_light, 48),
    );
    push_row(
        &mut output,
        "Dark Mode Icon",
        &truncate(&config.icon_dark, 48),
    );
    push_row(
        &mut output,
        "Object Types",
        &config.object_definitions.len().to_string(),
    );
    push_row(
        &mut output,
        "Quick Links",
        &config.quick_links.len().to_string(),
    );

    if !config.test_user_emails.is_empty() {
        output.push_str("\nTest users:\n");
        for email in &config.test_user_emails {
            output.push_str(&format!("  - {email}\n"));
        }
    }

    if !assembled.warnings.is_empty() {
        output.push_str(&format!("\nWarnings ({}):\n", assembled.warnings.len()));
        for warning in &assembled.warnings {
            output.push_str(&format!("  - {warning}\n"));
        }
    }

    output
}

/// Render the summary of a fetched remote record.
#[must_use]
pub fn remote_summary(id: &str, record: &RemoteDatasource) -> String {
    let mut output = String::new();

    output.push_str(&format!("=== Datasource Configuration: {id} ===\n"));
    push_row(&mut output, "Display Name", none_as_na(record.display_name.as_deref()));
    push_row(
        &mut output,
        "Category",
        none_as_na(record.datasource_category.as_deref()),
    );
    push_row(&mut output, "Home URL", none_as_na(record.home_url.as_deref()));
    push_row(&mut output, "URL Regex", none_as_na(record.url_regex.as_deref()));
    push_row(
        &mut output,
        "Suggestion Text",
        none_as_na(record.suggestion_text.as_deref()),
    );
    push_row(
        &mut output,
        "Icon (Light)",
        &record
            .icon_url
            .as_deref()
            .map_or_else(|| "N/A".to_string(), |url| truncate(url, 48)),
    );
    push_row(
        &mut output,
        "Icon (Dark)",
        &record
            .icon_dark_url
            .as_deref()
            .map_or_else(|| "N/A".to_string(), |url| truncate(url, 48)),
    );
    push_row(
        &mut output,
        "Test Mode",
        if record.is_test_datasource.unwrap_or(false) {
            "yes"
        } else {
            "no"
        },
    );
    push_row(
        &mut output,
        "User Reference",
        if record.is_user_referenced_by_email.unwrap_or(true) {
            "email"
        } else {
            "ID"
        },
    );
    push_row(
        &mut output,
        "Object Types",
        &record
            .object_definitions
            .as_deref()
            .map_or(0, |defs| defs.len())
            .to_string(),
    );
    push_row(
        &mut output,
        "Quick Links",
        &record
            .quicklinks
            .as_deref()
            .map_or(0, |links| links.len())
            .to_string(),
    );

    output
}

/// Render the result of an export run.
#[must_use]
pub fn export_summary(manifest: &ExportManifest) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\nConfiguration saved to {}/\n",
        manifest.dir.display()
    ));
    for filename in &manifest.written {
        output.push_str(&format!("  - {filename}\n"));
    }

    if manifest.is_complete() {
        output.push_str("Status: ✓ Export complete\n");
    } else {
        output.push_str(&format!(
            "\nFailed artifacts ({}):\n",
            manifest.failures.len()
        ));
        for failure in &manifest.failures {
            output.push_str(&format!("  - {}: {}\n", failure.artifact, failure.reason));
        }
        output.push_str("Status: ✗ Completed with errors\n");
    }

    output
}

fn push_row(output: &mut String, label: &str, value: &str) {
    output.push_str(&format!("{label:<18} {value}\n"));
}

fn none_as_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let prefix: String = value.chars().take(max).collect();
        format!("{prefix}...")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::export::ExportFailure;

    #[test]
    fn test_export_summary_lists_failures() {
        let manifest = ExportManifest {
            dir: PathBuf::from("my-app-config"),
            written: vec!["my-app.env".to_string()],
            failures: vec![ExportFailure {
                artifact: "icon-darkmode".to_string(),
                reason: "unsupported MIME type: image/gif".to_string(),
            }],
        };

        let summary = export_summary(&manifest);
        assert!(summary.contains("my-app.env"));
        assert!(summary.contains("icon-darkmode"));
        assert!(summary.contains("✗ Completed with errors"));
    }

    #[test]
    fn test_export_summary_success() {
        let manifest = ExportManifest {
            dir: PathBuf::from("my-app-config"),
            written: vec!["my-app.env".to_string()],
            failures: vec![],
        };

        assert!(export_summary(&manifest).contains("✓ Export complete"));
    }
}
