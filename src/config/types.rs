//! Canonical configuration types
//!
//! [`DatasourceConfig`] is the fully resolved record the synchronizer
//! pushes: every optional field has already been run through its fallback
//! chain, so icons are data URLs and `url_regex`/`suggestion_text` are
//! concrete strings. It is built fresh on every invocation and never
//! cached.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Fully assembled datasource configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasourceConfig {
    /// Datasource ID, a `^[a-z0-9-]+$` slug; immutable once the remote
    /// record exists
    pub id: String,
    /// Name shown to users, at most 50 characters
    pub display_name: String,
    /// Content category
    pub category: Category,
    /// Home/landing page URL of the application
    pub home_url: String,
    /// Regex matching document URLs for this datasource
    pub url_regex: String,
    /// Example text shown in the search box
    pub suggestion_text: String,
    /// Whether document authors are referenced by email rather than an ID
    pub user_referenced_by_email: bool,
    /// Whether the datasource starts visible only to test users
    pub is_test_mode: bool,
    /// Validated test user email addresses
    pub test_user_emails: Vec<String>,
    /// Light mode icon as a data URL
    pub icon_light: String,
    /// Dark mode icon as a data URL; falls back to the light icon, so it
    /// is always set
    pub icon_dark: String,
    /// Structured entity schemas for this datasource
    pub object_definitions: Vec<ObjectDefinition>,
    /// UI shortcut actions for this datasource
    pub quick_links: Vec<QuickLink>,
}

/// Schema for one kind of structured entity within a datasource.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDefinition {
    /// Unique key of the object type
    pub name: String,
    /// Label shown in the UI; defaults to `name`
    pub display_label: String,
    /// Document category of this object type
    pub doc_category: Category,
    /// Whether documents of this type may be summarized
    pub summarizable: bool,
    /// Named properties, in declaration order
    pub property_definitions: Vec<PropertyDefinition>,
    /// Property groups, in declaration order
    pub property_groups: Vec<PropertyGroup>,
}

/// One named property of an object definition.
///
/// Enum-valued members (`property_type`, `ui_options`) are carried as
/// plain string tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDefinition {
    /// Property key
    pub name: String,
    /// Singular UI label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    /// Plural UI label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label_plural: Option<String>,
    /// Value type tag, e.g. `DATE` or `USERID`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    /// Where the property surfaces in the UI, e.g. `SEARCH_RESULT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_options: Option<String>,
    /// Hide the property from facet filters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_ui_facet: Option<bool>,
    /// Relative position among facets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_facet_order: Option<i32>,
    /// Exclude the property from indexing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_indexing: Option<bool>,
    /// Property group this property belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// A named grouping of properties.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyGroup {
    /// Group key
    pub name: String,
    /// Label shown in the UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
}

/// A shortcut action surfaced in the platform UI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickLink {
    /// Full link label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Compact link label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Target URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Stable identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Icon shown next to the link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_config: Option<IconConfig>,
    /// Surfaces the link appears in, as plain string tags such as
    /// `APP_CARD` or `AUTOCOMPLETE_FUZZY_MATCH`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

/// Icon styling for a quick link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Icon kind tag, e.g. `GLYPH`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,
    /// Glyph or asset name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Foreground color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Key selecting a generated background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_background_color_key: Option<String>,
    /// Asset key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Whether the icon is rendered masked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked: Option<bool>,
    /// Icon URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl IconConfig {
    /// Whether no field is set at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
