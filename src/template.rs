//! Sample file scaffolding
//!
//! Generates starter `object_types.json`, `quick_links.json`, and env
//! files a user can edit into their own configuration.

use serde_json::json;

/// Filename for the generated env template
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Sample `object_types.json` content.
#[must_use]
pub fn object_types_json() -> String {
    let sample = json!({
        "objectTypes": [
            {
                "name": "article",
                "display_label": "News/Articles",
                "doc_category": "PUBLISHED_CONTENT",
                "summarizable": true,
                "property_definitions": [
                    {"name": "author", "display_label": "Author", "property_type": "USERID"},
                    {"name": "publishDate", "display_label": "Publish Date", "property_type": "DATE"},
                    {"name": "category", "display_label": "Category", "property_type": "PICKLIST", "ui_options": "SEARCH_RESULT"},
                    {"name": "tags", "display_label": "Tags", "display_label_plural": "Tags", "property_type": "TEXTLIST"}
                ],
                "property_groups": [
                    {"name": "metadata", "display_label": "Article Metadata"}
                ]
            },
            {"name": "site", "display_label": "Site", "doc_category": "KNOWLEDGE_HUB", "summarizable": false},
            {"name": "page", "display_label": "Page", "doc_category": "KNOWLEDGE_HUB", "summarizable": false},
            {"name": "event", "display_label": "Event", "doc_category": "PUBLISHED_CONTENT", "summarizable": true},
            {"name": "announcement", "display_label": "Announcement", "doc_category": "PUBLISHED_CONTENT", "summarizable": false},
            {"name": "question", "display_label": "FAQ", "doc_category": "QUESTION_ANSWER", "summarizable": true},
            {"name": "ticket", "display_label": "Ticket", "doc_category": "TICKETS", "summarizable": true},
            {"name": "document", "display_label": "Files", "doc_category": "COLLABORATIVE_CONTENT", "summarizable": true},
            {"name": "folder", "display_label": "Repository", "doc_category": "COLLABORATIVE_CONTENT", "summarizable": false}
        ]
    });

    serde_json::to_string_pretty(&sample).expect("static template") + "\n"
}

/// Sample `quick_links.json` content.
#[must_use]
pub fn quick_links_json() -> String {
    let sample = json!({
        "quicklinks": [
            {
                "name": "Create New Issue",
                "short_name": "New Issue",
                "url": "https://myapp.example.com/issues/create",
                "id": "create-issue",
                "icon_config": {"icon_type": "GLYPH", "name": "plus-circle", "color": "#343CED"},
                "scopes": ["APP_CARD", "AUTOCOMPLETE_EXACT_MATCH"]
            },
            {
                "name": "View All Entities",
                "short_name": "All Entities",
                "url": "https://myapp.example.com/catalog",
                "id": "view-all",
                "icon_config": {"icon_type": "GLYPH", "name": "list", "color": "#28A745"},
                "scopes": ["APP_CARD", "AUTOCOMPLETE_FUZZY_MATCH", "NEW_TAB_PAGE"]
            },
            {
                "name": "Search Documentation",
                "short_name": "Search Docs",
                "url": "https://myapp.example.com/docs/search",
                "id": "search-docs",
                "icon_config": {"icon_type": "GLYPH", "name": "search", "color": "#6C757D"},
                "scopes": ["AUTOCOMPLETE_ZERO_QUERY", "AUTOCOMPLETE_FUZZY_MATCH"]
            }
        ]
    });

    serde_json::to_string_pretty(&sample).expect("static template") + "\n"
}

/// Sample env file content with every key the assembler reads.
#[must_use]
pub fn example_env() -> String {
    "\
# Indexing API authentication
INDEXING_INSTANCE=your-instance-name
INDEXING_API_KEY=your-indexing-api-token

# Datasource configuration
DATASOURCE_DISPLAY_NAME=My Application
DATASOURCE_ID=my-application
DATASOURCE_CATEGORY=KNOWLEDGE_HUB
DATASOURCE_HOME_URL=https://myapp.example.com/dashboard
DATASOURCE_URL_REGEX=https://myapp.example.com/.*

# Icon configuration
# Default: place icon-lightmode.png and icon-darkmode.png in the working directory
# Or use one of these options:
# DATASOURCE_ICON_FILENAME_LIGHTMODE=path/to/icon-light.png
# DATASOURCE_ICON_URL_LIGHTMODE=https://myapp.example.com/logo.png
# DATASOURCE_ICON_FILENAME_DARKMODE=path/to/icon-dark.png
# DATASOURCE_ICON_URL_DARKMODE=https://myapp.example.com/logo-dark.png

# Identity configuration
DATASOURCE_USER_REFERENCED_BY_EMAIL=true

# Test mode configuration
DATASOURCE_IS_TEST_MODE=true
DATASOURCE_TEST_USER_EMAILS=user1@company.com,user2@company.com

# Optional settings
DATASOURCE_SUGGESTION_TEXT=Search for engineering docs...
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use crate::config::files::{ObjectTypesFile, QuickLinksFile};
    use crate::config::EnvSettings;

    use super::*;

    #[test]
    fn test_object_types_template_parses() {
        let file: ObjectTypesFile = serde_json::from_str(&object_types_json()).unwrap();
        assert_eq!(file.object_types.len(), 9);
        assert_eq!(file.object_types[0].name, "article");
        assert_eq!(file.object_types[0].property_definitions.len(), 4);
    }

    #[test]
    fn test_quick_links_template_parses() {
        let file: QuickLinksFile = serde_json::from_str(&quick_links_json()).unwrap();
        assert_eq!(file.quicklinks.len(), 3);
        assert!(file.quicklinks.iter().all(|l| l.icon_config.is_some()));
    }

    #[test]
    fn test_example_env_covers_assembler_keys() {
        let env = example_env();
        let pairs = env.lines().filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            line.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
        });

        let settings = EnvSettings::from_pairs(pairs);
        assert_eq!(settings.display_name.as_deref(), Some("My Application"));
        assert_eq!(settings.id.as_deref(), Some("my-application"));
        assert_eq!(settings.category.as_deref(), Some("KNOWLEDGE_HUB"));
        assert!(settings.test_user_emails.is_some());
    }
}
