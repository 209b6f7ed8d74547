//! Environment-based settings input
//!
//! Settings are collected from an explicit key/value iterator rather than
//! read ad hoc throughout the code, so the assembler receives plain
//! values and tests never touch process state. `load` layers a dotenv
//! file under the process environment (process variables win).

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

/// Env key for the indexing API credential
pub const KEY_API_KEY: &str = "INDEXING_API_KEY";
/// Env key for the instance identifier
pub const KEY_INSTANCE: &str = "INDEXING_INSTANCE";
/// Env key for the display name
pub const KEY_DISPLAY_NAME: &str = "DATASOURCE_DISPLAY_NAME";
/// Env key for the datasource ID
pub const KEY_ID: &str = "DATASOURCE_ID";
/// Env key for the category tag
pub const KEY_CATEGORY: &str = "DATASOURCE_CATEGORY";
/// Env key for the home URL
pub const KEY_HOME_URL: &str = "DATASOURCE_HOME_URL";
/// Env key for the URL regex override
pub const KEY_URL_REGEX: &str = "DATASOURCE_URL_REGEX";
/// Env key for the light mode icon file path
pub const KEY_ICON_FILE_LIGHT: &str = "DATASOURCE_ICON_FILENAME_LIGHTMODE";
/// Env key for the light mode icon URL
pub const KEY_ICON_URL_LIGHT: &str = "DATASOURCE_ICON_URL_LIGHTMODE";
/// Env key for the dark mode icon file path
pub const KEY_ICON_FILE_DARK: &str = "DATASOURCE_ICON_FILENAME_DARKMODE";
/// Env key for the dark mode icon URL
pub const KEY_ICON_URL_DARK: &str = "DATASOURCE_ICON_URL_DARKMODE";
/// Env key for the user identity reference mode
pub const KEY_USER_BY_EMAIL: &str = "DATASOURCE_USER_REFERENCED_BY_EMAIL";
/// Env key for test mode
pub const KEY_IS_TEST_MODE: &str = "DATASOURCE_IS_TEST_MODE";
/// Env key for the comma-separated test user emails
pub const KEY_TEST_USER_EMAILS: &str = "DATASOURCE_TEST_USER_EMAILS";
/// Env key for the suggestion text override
pub const KEY_SUGGESTION_TEXT: &str = "DATASOURCE_SUGGESTION_TEXT";

/// Raw settings as read from the environment. All fields are optional
/// strings; validation and defaulting happen during assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSettings {
    /// Opaque bearer credential for the indexing API
    pub api_key: Option<String>,
    /// Opaque instance identifier
    pub instance: Option<String>,
    /// Display name
    pub display_name: Option<String>,
    /// Datasource ID
    pub id: Option<String>,
    /// Category tag
    pub category: Option<String>,
    /// Home URL
    pub home_url: Option<String>,
    /// URL regex override
    pub url_regex: Option<String>,
    /// Light mode icon file path
    pub icon_file_light: Option<String>,
    /// Light mode icon URL
    pub icon_url_light: Option<String>,
    /// Dark mode icon file path
    pub icon_file_dark: Option<String>,
    /// Dark mode icon URL
    pub icon_url_dark: Option<String>,
    /// User identity reference mode
    pub user_referenced_by_email: Option<String>,
    /// Test mode flag
    pub is_test_mode: Option<String>,
    /// Comma-separated test user emails
    pub test_user_emails: Option<String>,
    /// Suggestion text override
    pub suggestion_text: Option<String>,
}

impl EnvSettings {
    /// Build settings from key/value pairs. Later pairs override earlier
    /// ones; empty values are treated as unset.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: HashMap<String, String> = HashMap::new();
        for (key, value) in pairs {
            map.insert(key.into(), value.into());
        }

        let mut get = |key: &str| {
            map.remove(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_key: get(KEY_API_KEY),
            instance: get(KEY_INSTANCE),
            display_name: get(KEY_DISPLAY_NAME),
            id: get(KEY_ID),
            category: get(KEY_CATEGORY),
            home_url: get(KEY_HOME_URL),
            url_regex: get(KEY_URL_REGEX),
            icon_file_light: get(KEY_ICON_FILE_LIGHT),
            icon_url_light: get(KEY_ICON_URL_LIGHT),
            icon_file_dark: get(KEY_ICON_FILE_DARK),
            icon_url_dark: get(KEY_ICON_URL_DARK),
            user_referenced_by_email: get(KEY_USER_BY_EMAIL),
            is_test_mode: get(KEY_IS_TEST_MODE),
            test_user_emails: get(KEY_TEST_USER_EMAILS),
            suggestion_text: get(KEY_SUGGESTION_TEXT),
        }
    }

    /// Load settings from a dotenv file layered under the process
    /// environment.
    ///
    /// With no explicit `env_file`, `<base_dir>/.env` is used when
    /// present and silently skipped otherwise. An explicit file that
    /// cannot be read is an error.
    ///
    /// # Errors
    ///
    /// Returns an error when an explicitly named env file is missing or
    /// unparsable.
    pub fn load(base_dir: &Path, env_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut pairs: Vec<(String, String)> = Vec::new();

        let file = match env_file {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default = base_dir.join(".env");
                default.exists().then_some(default)
            }
        };

        if let Some(path) = file {
            for item in dotenvy::from_path_iter(&path)
                .with_context(|| format!("cannot read env file {}", path.display()))?
            {
                let (key, value) = item
                    .with_context(|| format!("cannot parse env file {}", path.display()))?;
                pairs.push((key, value));
            }
        }

        // Process environment wins over the file
        pairs.extend(std::env::vars());

        Ok(Self::from_pairs(pairs))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_from_pairs_picks_known_keys() {
        let settings = EnvSettings::from_pairs([
            (KEY_ID, "my-app"),
            (KEY_DISPLAY_NAME, "My App"),
            ("UNRELATED_VAR", "ignored"),
        ]);

        assert_eq!(settings.id.as_deref(), Some("my-app"));
        assert_eq!(settings.display_name.as_deref(), Some("My App"));
        assert_eq!(settings.category, None);
    }

    #[test]
    fn test_from_pairs_empty_value_is_unset() {
        let settings = EnvSettings::from_pairs([(KEY_URL_REGEX, ""), (KEY_SUGGESTION_TEXT, "  ")]);
        assert_eq!(settings.url_regex, None);
        assert_eq!(settings.suggestion_text, None);
    }

    #[test]
    fn test_from_pairs_later_pair_wins() {
        let settings =
            EnvSettings::from_pairs([(KEY_ID, "from-file"), (KEY_ID, "from-process")]);
        assert_eq!(settings.id.as_deref(), Some("from-process"));
    }

    #[test]
    fn test_load_reads_env_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".env"),
            "DATASOURCE_ID=file-id\nDATASOURCE_HOME_URL=https://example.com\n",
        )
        .unwrap();

        let settings = EnvSettings::load(dir.path(), None).unwrap();
        assert_eq!(settings.id.as_deref(), Some("file-id"));
        assert_eq!(settings.home_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_load_missing_default_env_is_fine() {
        let dir = TempDir::new().unwrap();
        let settings = EnvSettings::load(dir.path(), None).unwrap();
        assert_eq!(settings.id, None);
    }

    #[test]
    fn test_load_missing_explicit_env_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.env");
        assert!(EnvSettings::load(dir.path(), Some(&missing)).is_err());
    }
}
