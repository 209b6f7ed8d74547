//! Remote wire shape and the local-to-remote translation
//!
//! The remote API exchanges camelCase JSON records. [`to_remote`] is the
//! single place where a local [`DatasourceConfig`] becomes a wire record:
//! optional sub-objects are included only when their source data is
//! non-empty, and the three structural platform flags are forced here
//! regardless of local configuration.

use serde::{Deserialize, Serialize};

use crate::config::types::{
    DatasourceConfig, IconConfig, ObjectDefinition, PropertyDefinition, PropertyGroup, QuickLink,
};

/// Remote record for a custom datasource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteDatasource {
    /// Datasource ID the record is keyed by
    pub name: String,
    /// Name shown to users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Category tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource_category: Option<String>,
    /// Regex matching document URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_regex: Option<String>,
    /// Light mode icon as a data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Dark mode icon as a data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_dark_url: Option<String>,
    /// Home/landing page URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    /// Search box example text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_text: Option<String>,
    /// Structured entity schemas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_definitions: Option<Vec<RemoteObjectDefinition>>,
    /// UI shortcut actions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quicklinks: Option<Vec<RemoteQuickLink>>,
    /// Whether users are referenced by email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_user_referenced_by_email: Option<bool>,
    /// Whether the datasource is visible only to test users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test_datasource: Option<bool>,
    /// Platform flag, always enabled on push
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_url_regex_for_view_activity: Option<bool>,
    /// Platform flag, always enabled on push
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_fragment_in_canonical_url: Option<bool>,
    /// Platform flag, always disabled on push
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_entity_datasource: Option<bool>,
}

/// Wire shape of an object definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteObjectDefinition {
    /// Unique key of the object type
    pub name: String,
    /// UI label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    /// Document category tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_category: Option<String>,
    /// Named properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_definitions: Option<Vec<RemotePropertyDefinition>>,
    /// Property groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_groups: Option<Vec<RemotePropertyGroup>>,
    /// Whether documents of this type may be summarized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarizable: Option<bool>,
}

/// Wire shape of a property definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemotePropertyDefinition {
    /// Property key
    pub name: String,
    /// Singular UI label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    /// Plural UI label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label_plural: Option<String>,
    /// Value type tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    /// UI surface tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_options: Option<String>,
    /// Hide from facet filters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_ui_facet: Option<bool>,
    /// Relative facet position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_facet_order: Option<i32>,
    /// Exclude from indexing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_indexing: Option<bool>,
    /// Owning property group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Wire shape of a property group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemotePropertyGroup {
    /// Group key
    pub name: String,
    /// UI label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
}

/// Wire shape of a quick link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteQuickLink {
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
    /// Icon styling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_config: Option<RemoteIconConfig>,
    /// Surfaces the link appears in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

/// Wire shape of a quick link icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteIconConfig {
    /// Icon kind tag
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

/// Translate an assembled local configuration into the remote wire
/// record used by both create and update.
#[must_use]
pub fn to_remote(config: &DatasourceConfig) -> RemoteDatasource {
    let object_definitions: Vec<RemoteObjectDefinition> = config
        .object_definitions
        .iter()
        .map(object_to_remote)
        .collect();
    let quicklinks: Vec<RemoteQuickLink> =
        config.quick_links.iter().map(quicklink_to_remote).collect();

    RemoteDatasource {
        name: config.id.clone(),
        display_name: Some(config.display_name.clone()),
        datasource_category: Some(config.category.as_tag().to_string()),
        url_regex: Some(config.url_regex.clone()),
        icon_url: Some(config.icon_light.clone()),
        icon_dark_url: Some(config.icon_dark.clone()),
        home_url: Some(config.home_url.clone()),
        suggestion_text: Some(config.suggestion_text.clone()),
        object_definitions: (!object_definitions.is_empty()).then_some(object_definitions),
        quicklinks: (!quicklinks.is_empty()).then_some(quicklinks),
        is_user_referenced_by_email: Some(config.user_referenced_by_email),
        is_test_datasource: Some(config.is_test_mode),
        // Fixed platform-level policy, not user-configurable
        trust_url_regex_for_view_activity: Some(true),
        strip_fragment_in_canonical_url: Some(true),
        is_entity_datasource: Some(false),
    }
}

fn object_to_remote(def: &ObjectDefinition) -> RemoteObjectDefinition {
    let properties: Vec<RemotePropertyDefinition> = def
        .property_definitions
        .iter()
        .map(property_to_remote)
        .collect();
    let groups: Vec<RemotePropertyGroup> =
        def.property_groups.iter().map(group_to_remote).collect();

    RemoteObjectDefinition {
        name: def.name.clone(),
        display_label: Some(def.display_label.clone()),
        doc_category: Some(def.doc_category.as_tag().to_string()),
        property_definitions: (!properties.is_empty()).then_some(properties),
        property_groups: (!groups.is_empty()).then_some(groups),
        summarizable: Some(def.summarizable),
    }
}

fn property_to_remote(prop: &PropertyDefinition) -> RemotePropertyDefinition {
    RemotePropertyDefinition {
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

fn group_to_remote(group: &PropertyGroup) -> RemotePropertyGroup {
    RemotePropertyGroup {
        name: group.name.clone(),
        display_label: group.display_label.clone(),
    }
}

fn quicklink_to_remote(link: &QuickLink) -> RemoteQuickLink {
    RemoteQuickLink {
        name: link.name.clone(),
        short_name: link.short_name.clone(),
        url: link.url.clone(),
        id: link.id.clone(),
        icon_config: link
            .icon_config
            .as_ref()
            .filter(|icon| !icon.is_empty())
            .map(icon_to_remote),
        scopes: (!link.scopes.is_empty()).then(|| link.scopes.clone()),
    }
}

fn icon_to_remote(icon: &IconConfig) -> RemoteIconConfig {
    RemoteIconConfig {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn sample_config() -> DatasourceConfig {
        DatasourceConfig {
            id: "my-app".to_string(),
            display_name: "My App".to_string(),
            category: Category::Tickets,
            home_url: "https://app.example.com/dash".to_string(),
            url_regex: "https://app.example.com/.*".to_string(),
            suggestion_text: "Search for anything in My App...".to_string(),
            user_referenced_by_email: true,
            is_test_mode: true,
            test_user_emails: vec![],
            icon_light: "data:image/png;base64,bGlnaHQ=".to_string(),
            icon_dark: "data:image/png;base64,ZGFyaw==".to_string(),
            object_definitions: vec![],
            quick_links: vec![],
        }
    }

    #[test]
    fn test_platform_flags_always_forced() {
        let record = to_remote(&sample_config());
        assert_eq!(record.trust_url_regex_for_view_activity, Some(true));
        assert_eq!(record.strip_fragment_in_canonical_url, Some(true));
        assert_eq!(record.is_entity_datasource, Some(false));
    }

    #[test]
    fn test_record_keyed_by_id() {
        let record = to_remote(&sample_config());
        assert_eq!(record.name, "my-app");
        assert_eq!(record.display_name.as_deref(), Some("My App"));
        assert_eq!(record.datasource_category.as_deref(), Some("TICKETS"));
    }

    #[test]
    fn test_empty_collections_omitted() {
        let record = to_remote(&sample_config());
        assert_eq!(record.object_definitions, None);
        assert_eq!(record.quicklinks, None);

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("objectDefinitions"));
        assert!(!json.contains("quicklinks"));
    }

    #[test]
    fn test_object_definition_translation() {
        let mut config = sample_config();
        config.object_definitions = vec![ObjectDefinition {
            name: "ticket".to_string(),
            display_label: "Ticket".to_string(),
            doc_category: Category::Tickets,
            summarizable: true,
            property_definitions: vec![PropertyDefinition {
                name: "assignee".to_string(),
                property_type: Some("USERID".to_string()),
                ..PropertyDefinition::default()
            }],
            property_groups: vec![],
        }];

        let record = to_remote(&config);
        let defs = record.object_definitions.unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].doc_category.as_deref(), Some("TICKETS"));
        assert_eq!(defs[0].summarizable, Some(true));
        assert_eq!(
            defs[0].property_definitions.as_ref().unwrap()[0]
                .property_type
                .as_deref(),
            Some("USERID")
        );
        // Empty group list stays off the wire
        assert_eq!(defs[0].property_groups, None);
    }

    #[test]
    fn test_quicklink_empty_icon_config_omitted() {
        let mut config = sample_config();
        config.quick_links = vec![QuickLink {
            name: Some("All Items".to_string()),
            url: Some("https://app.example.com/items".to_string()),
            icon_config: Some(IconConfig::default()),
            ..QuickLink::default()
        }];

        let record = to_remote(&config);
        let links = record.quicklinks.unwrap();
        assert_eq!(links[0].icon_config, None);
        assert_eq!(links[0].scopes, None);
    }

    #[test]
    fn test_wire_serializes_camel_case() {
        let record = to_remote(&sample_config());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"displayName\""));
        assert!(json.contains("\"datasourceCategory\""));
        assert!(json.contains("\"iconDarkUrl\""));
        assert!(json.contains("\"isTestDatasource\""));
        assert!(json.contains("\"trustUrlRegexForViewActivity\""));
    }
}
