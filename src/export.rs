//! Pull-path export
//!
//! Reconstructs the local file layout from a remote record:
//! `<id>-config/` with an env file, optional JSON definition files, and
//! icon files decoded from their data URLs. The artifacts are exactly
//! what the assembler consumes, closing the round trip. Each artifact is
//! attempted independently; one failure never aborts its siblings, and
//! writes are idempotent overwrites so a partially populated directory
//! is safe to re-run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::config::files::{ObjectTypeEntry, ObjectTypesFile, QuickLinksFile, OBJECT_TYPES_FILE, QUICK_LINKS_FILE};
use crate::config::types::{IconConfig, PropertyDefinition, PropertyGroup, QuickLink};
use crate::config::{DEFAULT_ICON_DARK, DEFAULT_ICON_LIGHT};
use crate::error::ExportError;
use crate::resolve::icon::{decode_data_url, extension_for_mime};
use crate::sync::wire::{
    RemoteDatasource, RemoteIconConfig, RemoteObjectDefinition, RemotePropertyDefinition,
    RemotePropertyGroup, RemoteQuickLink,
};

/// One artifact that could not be produced. Recorded in the manifest so
/// sibling artifacts still get written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    /// Artifact name, e.g. `icon-darkmode`
    pub artifact: String,
    /// Why it failed
    pub reason: String,
}

/// Result of one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportManifest {
    /// Directory the artifacts were written into
    pub dir: PathBuf,
    /// Filenames written, in write order
    pub written: Vec<String>,
    /// Artifacts that failed, with reasons
    pub failures: Vec<ExportFailure>,
}

impl ExportManifest {
    /// Whether every attempted artifact was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Export a remote record into `<target_dir>/<id>-config/`.
///
/// The instance identifier is written into the env file so the directory
/// can be pushed back as-is; the API credential is never round-tripped
/// and is left blank.
///
/// # Errors
///
/// Returns [`ExportError::Mapping`] when the record carries an unknown
/// category tag (fatal to the whole pull), or [`ExportError::CreateDir`]
/// when the export directory cannot be created. All other failures are
/// per-artifact and recorded in the manifest.
pub fn export(
    record: &RemoteDatasource,
    id: &str,
    instance: &str,
    target_dir: &Path,
) -> Result<ExportManifest, ExportError> {
    // Unknown tags from the remote fail the pull before anything is
    // written; the push-path default does not apply here.
    let category = match record.datasource_category.as_deref() {
        Some(tag) => Category::from_tag(tag)?,
        None => Category::default(),
    };
    for def in record.object_definitions.iter().flatten() {
        if let Some(tag) = def.doc_category.as_deref() {
            Category::from_tag(tag)?;
        }
    }

    let dir = target_dir.join(format!("{id}-config"));
    fs::create_dir_all(&dir).map_err(|e| ExportError::CreateDir {
        dir: dir.display().to_string(),
        source: e,
    })?;

    let mut manifest = ExportManifest {
        dir: dir.clone(),
        ..ExportManifest::default()
    };

    let icon_light_filename = write_icon(
        record.icon_url.as_deref(),
        "icon-lightmode",
        &dir,
        &mut manifest,
    );
    let icon_dark_filename = write_icon(
        record.icon_dark_url.as_deref(),
        "icon-darkmode",
        &dir,
        &mut manifest,
    );

    if let Some(defs) = record.object_definitions.as_deref()
        && !defs.is_empty()
    {
        let file = ObjectTypesFile {
            object_types: defs.iter().map(object_to_entry).collect(),
        };
        write_json(&dir, OBJECT_TYPES_FILE, &file, &mut manifest);
    }

    if let Some(links) = record.quicklinks.as_deref()
        && !links.is_empty()
    {
        let file = QuickLinksFile {
            quicklinks: links.iter().map(quicklink_to_entry).collect(),
        };
        write_json(&dir, QUICK_LINKS_FILE, &file, &mut manifest);
    }

    let env_name = format!("{id}.env");
    let env_content = render_env_file(
        record,
        id,
        instance,
        category,
        icon_light_filename.as_deref(),
        icon_dark_filename.as_deref(),
    );
    match fs::write(dir.join(&env_name), env_content) {
        Ok(()) => manifest.written.push(env_name),
        Err(e) => manifest.failures.push(ExportFailure {
            artifact: env_name,
            reason: e.to_string(),
        }),
    }

    Ok(manifest)
}

/// Decode a data URL icon and write it with the extension implied by its
/// MIME type. Returns the filename on success.
fn write_icon(
    data_url: Option<&str>,
    stem: &str,
    dir: &Path,
    manifest: &mut ExportManifest,
) -> Option<String> {
    let data_url = data_url?;

    let write = || -> Result<String, String> {
        let (mime, content) = decode_data_url(data_url)?;
        let ext = extension_for_mime(mime).ok_or_else(|| format!("unsupported MIME type: {mime}"))?;
        let filename = format!("{stem}.{ext}");
        fs::write(dir.join(&filename), content).map_err(|e| e.to_string())?;
        Ok(filename)
    };

    match write() {
        Ok(filename) => {
            manifest.written.push(filename.clone());
            Some(filename)
        }
        Err(reason) => {
            manifest.failures.push(ExportFailure {
                artifact: stem.to_string(),
                reason,
            });
            None
        }
    }
}

fn write_json<T: serde::Serialize>(
    dir: &Path,
    filename: &str,
    value: &T,
    manifest: &mut ExportManifest,
) {
    let result = serde_json::to_string_pretty(value)
        .map_err(|e| e.to_string())
        .and_then(|json| fs::write(dir.join(filename), json + "\n").map_err(|e| e.to_string()));

    match result {
        Ok(()) => manifest.written.push(filename.to_string()),
        Err(reason) => manifest.failures.push(ExportFailure {
            artifact: filename.to_string(),
            reason,
        }),
    }
}

fn object_to_entry(def: &RemoteObjectDefinition) -> ObjectTypeEntry {
    ObjectTypeEntry {
        name: def.name.clone(),
        display_label: Some(
            def.display_label
                .clone()
                .unwrap_or_else(|| def.name.clone()),
        ),
        doc_category: Some(
            def.doc_category
                .clone()
                .unwrap_or_else(|| Category::default().as_tag().to_string()),
        ),
        summarizable: Some(def.summarizable.unwrap_or(false)),
        property_definitions: def
            .property_definitions
            .iter()
            .flatten()
            .map(property_to_entry)
            .collect(),
        property_groups: def
            .property_groups
            .iter()
            .flatten()
            .map(group_to_entry)
            .collect(),
    }
}

fn property_to_entry(prop: &RemotePropertyDefinition) -> PropertyDefinition {
    PropertyDefinition {
        name: prop.name.clone(),
        display_label: prop.display_label.clone(),
        display_label_plural: prop.display_label_plural.clone(),
        property_type: prop.property_type.clone(),
        ui_options: prop.ui_options.clone(),
        hide_ui_facet: prop.hide_ui_facet,
        ui_facet_order: prop.ui_facet_order,
        skip_indexing: prop.skip_indexing,
        group: prop.group.clone(),
    }
}

fn group_to_entry(group: &RemotePropertyGroup) -> PropertyGroup {
    PropertyGroup {
        name: group.name.clone(),
        display_label: group.display_label.clone(),
    }
}

fn quicklink_to_entry(link: &RemoteQuickLink) -> QuickLink {
    QuickLink {
        name: link.name.clone(),
        short_name: link.short_name.clone(),
        url: link.url.clone(),
        id: link.id.clone(),
        icon_config: link
            .icon_config
            .as_ref()
            .map(icon_to_entry)
            .filter(|icon| !icon.is_empty()),
        scopes: link.scopes.clone().unwrap_or_default(),
    }
}

fn icon_to_entry(icon: &RemoteIconConfig) -> IconConfig {
    IconConfig {
        icon_type: icon.icon_type.clone(),
        name: icon.name.clone(),
        color: icon.color.clone(),
        background_color: icon.background_color.clone(),
        generated_background_color_key: icon.generated_background_color_key.clone(),
        key: icon.key.clone(),
        masked: icon.masked,
        url: icon.url.clone(),
    }
}

fn render_env_file(
    record: &RemoteDatasource,
    id: &str,
    instance: &str,
    category: Category,
    icon_light_filename: Option<&str>,
    icon_dark_filename: Option<&str>,
) -> String {
    format!(
        "# Indexing API authentication\n\
         INDEXING_INSTANCE={instance}\n\
         # The API credential is never exported; fill it in before pushing\n\
         INDEXING_API_KEY=\n\
         \n\
         # Datasource configuration\n\
         DATASOURCE_DISPLAY_NAME={display_name}\n\
         DATASOURCE_ID={id}\n\
         DATASOURCE_CATEGORY={category}\n\
         DATASOURCE_HOME_URL={home_url}\n\
         DATASOURCE_URL_REGEX={url_regex}\n\
         \n\
         # Icon configuration\n\
         DATASOURCE_ICON_FILENAME_LIGHTMODE={icon_light}\n\
         DATASOURCE_ICON_FILENAME_DARKMODE={icon_dark}\n\
         \n\
         # Identity configuration\n\
         DATASOURCE_USER_REFERENCED_BY_EMAIL={user_by_email}\n\
         \n\
         # Test mode configuration\n\
         DATASOURCE_IS_TEST_MODE={is_test_mode}\n\
         # DATASOURCE_TEST_USER_EMAILS=\n\
         \n\
         # Optional settings\n\
         DATASOURCE_SUGGESTION_TEXT={suggestion_text}\n",
        display_name = record.display_name.as_deref().unwrap_or(""),
        category = category.as_tag(),
        home_url = record.home_url.as_deref().unwrap_or(""),
        url_regex = record.url_regex.as_deref().unwrap_or(""),
        icon_light = icon_light_filename.unwrap_or(DEFAULT_ICON_LIGHT),
        icon_dark = icon_dark_filename.unwrap_or(DEFAULT_ICON_DARK),
        user_by_email = record.is_user_referenced_by_email.unwrap_or(true),
        is_test_mode = record.is_test_datasource.unwrap_or(true),
        suggestion_text = record.suggestion_text.as_deref().unwrap_or(""),
    )
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::resolve::icon::{encode_data_url, MIME_PNG, MIME_SVG};

    fn sample_record() -> RemoteDatasource {
        RemoteDatasource {
            name: "my-app".to_string(),
            display_name: Some("My App".to_string()),
            datasource_category: Some("TICKETS".to_string()),
            url_regex: Some("https://app.example.com/.*".to_string()),
            icon_url: Some(encode_data_url(MIME_PNG, b"light")),
            icon_dark_url: Some(encode_data_url(MIME_SVG, b"<svg/>")),
            home_url: Some("https://app.example.com".to_string()),
            suggestion_text: Some("Search tickets...".to_string()),
            is_user_referenced_by_email: Some(true),
            is_test_datasource: Some(false),
            ..RemoteDatasource::default()
        }
    }

    #[test]
    fn test_export_writes_layout() {
        let dir = TempDir::new().unwrap();
        let manifest = export(&sample_record(), "my-app", "acme", dir.path()).unwrap();

        assert!(manifest.is_complete());
        assert_eq!(manifest.dir, dir.path().join("my-app-config"));
        assert!(manifest.dir.join("my-app.env").exists());
        assert!(manifest.dir.join("icon-lightmode.png").exists());
        assert!(manifest.dir.join("icon-darkmode.svg").exists());
        // No definitions, no files
        assert!(!manifest.dir.join(OBJECT_TYPES_FILE).exists());
        assert!(!manifest.dir.join(QUICK_LINKS_FILE).exists());
    }

    #[test]
    fn test_env_file_redacts_credential() {
        let dir = TempDir::new().unwrap();
        let manifest = export(&sample_record(), "my-app", "acme", dir.path()).unwrap();

        let env = fs::read_to_string(manifest.dir.join("my-app.env")).unwrap();
        assert!(env.contains("INDEXING_API_KEY=\n"));
        assert!(env.contains("INDEXING_INSTANCE=acme"));
        assert!(env.contains("DATASOURCE_DISPLAY_NAME=My App"));
        assert!(env.contains("DATASOURCE_CATEGORY=TICKETS"));
        assert!(env.contains("DATASOURCE_IS_TEST_MODE=false"));
        assert!(env.contains("DATASOURCE_ICON_FILENAME_LIGHTMODE=icon-lightmode.png"));
        assert!(env.contains("DATASOURCE_ICON_FILENAME_DARKMODE=icon-darkmode.svg"));
    }

    #[test]
    fn test_unknown_category_fails_pull() {
        let dir = TempDir::new().unwrap();
        let mut record = sample_record();
        record.datasource_category = Some("HOLOGRAMS".to_string());

        let err = export(&record, "my-app", "acme", dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::Mapping(_)));
        // Nothing was written
        assert!(!dir.path().join("my-app-config").exists());
    }

    #[test]
    fn test_bad_icon_does_not_abort_siblings() {
        let dir = TempDir::new().unwrap();
        let mut record = sample_record();
        record.icon_dark_url = Some("data:image/gif;base64,R0lGOD==".to_string());

        let manifest = export(&record, "my-app", "acme", dir.path()).unwrap();

        assert!(!manifest.is_complete());
        assert_eq!(manifest.failures.len(), 1);
        assert_eq!(manifest.failures[0].artifact, "icon-darkmode");
        // Siblings were still written
        assert!(manifest.dir.join("icon-lightmode.png").exists());
        assert!(manifest.dir.join("my-app.env").exists());
        // The env file falls back to the default dark icon name
        let env = fs::read_to_string(manifest.dir.join("my-app.env")).unwrap();
        assert!(env.contains("DATASOURCE_ICON_FILENAME_DARKMODE=icon-darkmode.png"));
    }

    #[test]
    fn test_object_types_written_minimally() {
        let dir = TempDir::new().unwrap();
        let mut record = sample_record();
        record.object_definitions = Some(vec![RemoteObjectDefinition {
            name: "ticket".to_string(),
            display_label: None,
            doc_category: Some("TICKETS".to_string()),
            property_definitions: None,
            property_groups: None,
            summarizable: None,
        }]);

        let manifest = export(&record, "my-app", "acme", dir.path()).unwrap();
        assert!(manifest.is_complete());

        let json = fs::read_to_string(manifest.dir.join(OBJECT_TYPES_FILE)).unwrap();
        let parsed: ObjectTypesFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.object_types.len(), 1);
        assert_eq!(parsed.object_types[0].display_label.as_deref(), Some("ticket"));
        assert_eq!(parsed.object_types[0].summarizable, Some(false));
        // Empty optional containers are omitted, not emitted empty
        assert!(!json.contains("property_definitions"));
        assert!(!json.contains("property_groups"));
    }

    #[test]
    fn test_quicklinks_written_with_string_tags() {
        let dir = TempDir::new().unwrap();
        let mut record = sample_record();
        record.quicklinks = Some(vec![RemoteQuickLink {
            name: Some("Create Issue".to_string()),
            url: Some("https://app.example.com/new".to_string()),
            icon_config: Some(RemoteIconConfig {
                icon_type: Some("GLYPH".to_string()),
                name: Some("plus-circle".to_string()),
                ..RemoteIconConfig::default()
            }),
            scopes: Some(vec!["APP_CARD".to_string()]),
            ..RemoteQuickLink::default()
        }]);

        let manifest = export(&record, "my-app", "acme", dir.path()).unwrap();
        assert!(manifest.is_complete());

        let json = fs::read_to_string(manifest.dir.join(QUICK_LINKS_FILE)).unwrap();
        assert!(json.contains("\"GLYPH\""));
        assert!(json.contains("\"APP_CARD\""));

        let parsed: QuickLinksFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.quicklinks[0].scopes, vec!["APP_CARD"]);
    }

    #[test]
    fn test_export_is_idempotent_overwrite() {
        let dir = TempDir::new().unwrap();
        export(&sample_record(), "my-app", "acme", dir.path()).unwrap();
        let manifest = export(&sample_record(), "my-app", "acme", dir.path()).unwrap();
        assert!(manifest.is_complete());
    }
}
