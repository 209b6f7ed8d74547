//! Auxiliary JSON definition files
//!
//! `object_types.json` and `quick_links.json` are optional inputs: a
//! missing or unparsable file degrades to an empty list with a warning so
//! assembly never hard-fails on them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::config::types::{ObjectDefinition, PropertyDefinition, PropertyGroup, QuickLink};

/// Conventional object definitions filename
pub const OBJECT_TYPES_FILE: &str = "object_types.json";
/// Conventional quick links filename
pub const QUICK_LINKS_FILE: &str = "quick_links.json";

/// On-disk shape of `object_types.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectTypesFile {
    /// Declared object types
    #[serde(rename = "objectTypes", default)]
    pub object_types: Vec<ObjectTypeEntry>,
}

/// One object type as written in `object_types.json`.
///
/// The `doc_category` tag is kept as a raw string here; unknown tags
/// default to `KNOWLEDGE_HUB` on the push path instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectTypeEntry {
    /// Unique key of the object type
    pub name: String,
    /// Label shown in the UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    /// Document category tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_category: Option<String>,
    /// Whether documents of this type may be summarized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarizable: Option<bool>,
    /// Named properties
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_definitions: Vec<PropertyDefinition>,
    /// Property groups
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_groups: Vec<PropertyGroup>,
}

impl ObjectTypeEntry {
    /// Convert the raw file entry into the typed model.
    ///
    /// `display_label` defaults to `name`, `doc_category` to
    /// `KNOWLEDGE_HUB`, and `summarizable` to `false` when omitted.
    #[must_use]
    pub fn into_definition(self) -> ObjectDefinition {
        ObjectDefinition {
            display_label: self.display_label.unwrap_or_else(|| self.name.clone()),
            doc_category: Category::from_tag_or_default(self.doc_category.as_deref()),
            summarizable: self.summarizable.unwrap_or(false),
            name: self.name,
            property_definitions: self.property_definitions,
            property_groups: self.property_groups,
        }
    }
}

/// On-disk shape of `quick_links.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuickLinksFile {
    /// Declared quick links
    #[serde(default)]
    pub quicklinks: Vec<QuickLink>,
}

/// Load object definitions from `<base_dir>/object_types.json`.
///
/// Returns the definitions plus a warning when the file exists but
/// cannot be used. A missing file is not a warning.
#[must_use]
pub fn load_object_definitions(base_dir: &Path) -> (Vec<ObjectDefinition>, Option<String>) {
    let path = base_dir.join(OBJECT_TYPES_FILE);
    if !path.exists() {
        return (Vec::new(), None);
    }

    match read_json::<ObjectTypesFile>(&path) {
        Ok(file) => (
            file.object_types
                .into_iter()
                .map(ObjectTypeEntry::into_definition)
                .collect(),
            None,
        ),
        Err(reason) => (
            Vec::new(),
            Some(format!(
                "failed to load object definitions from {}: {reason}",
                path.display()
            )),
        ),
    }
}

/// Load quick links from `<base_dir>/quick_links.json`.
///
/// Same degradation rules as [`load_object_definitions`].
#[must_use]
pub fn load_quick_links(base_dir: &Path) -> (Vec<QuickLink>, Option<String>) {
    let path = base_dir.join(QUICK_LINKS_FILE);
    if !path.exists() {
        return (Vec::new(), None);
    }

    match read_json::<QuickLinksFile>(&path) {
        Ok(file) => (file.quicklinks, None),
        Err(reason) => (
            Vec::new(),
            Some(format!(
                "failed to load quick links from {}: {reason}",
                path.display()
            )),
        ),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}
