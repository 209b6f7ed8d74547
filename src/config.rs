//! Configuration assembly
//!
//! This module builds one validated [`DatasourceConfig`] per invocation:
//! - env parsing into explicit values ([`env`])
//! - field-level validation with batched errors ([`validation`])
//! - optional auxiliary JSON definitions ([`files`])
//! - fallback chains for icons, URL regex, and suggestion text

pub mod env;
pub mod files;
pub mod types;
pub mod validation;

use std::path::Path;

pub use env::EnvSettings;
pub use types::DatasourceConfig;

use crate::config::env::{
    KEY_ICON_FILE_DARK, KEY_ICON_FILE_LIGHT, KEY_ICON_URL_DARK, KEY_ICON_URL_LIGHT,
};
use crate::error::AssembleError;
use crate::resolve::icon::{self, IconSpec};
use crate::resolve::Chain;

/// Default light mode icon filename looked up in the working directory
pub const DEFAULT_ICON_LIGHT: &str = "icon-lightmode.png";
/// Default dark mode icon filename looked up in the working directory
pub const DEFAULT_ICON_DARK: &str = "icon-darkmode.png";

/// An assembled configuration plus the non-fatal warnings recorded while
/// building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled {
    /// The canonical configuration record
    pub config: DatasourceConfig,
    /// Warnings (dropped emails, unusable auxiliary files)
    pub warnings: Vec<String>,
}

/// Assemble a validated configuration from environment settings and the
/// auxiliary files under `base_dir`.
///
/// Validation runs first and reports every failing field at once; the
/// fallback chains for optional fields run after it. Auxiliary files are
/// optional and degrade to empty lists with a warning.
///
/// # Errors
///
/// Returns [`AssembleError::Validation`] when identity fields are
/// malformed, or [`AssembleError::Resolution`] when a fallback chain
/// fails (such as a configured icon file that does not exist).
pub fn assemble(settings: &EnvSettings, base_dir: &Path) -> Result<Assembled, AssembleError> {
    let validated = validation::validate(settings)?;
    let mut warnings = Vec::new();

    let url_regex = Chain::new("URL regex")
        .candidate("explicit override", || Ok(settings.url_regex.clone()))
        .candidate("derived from home URL", || {
            Ok(Some(derive_url_regex(&validated.home_url)))
        })
        .resolve()?;

    let suggestion_text = Chain::new("suggestion text")
        .candidate("explicit override", || Ok(settings.suggestion_text.clone()))
        .candidate("derived from display name", || {
            Ok(Some(format!(
                "Search for anything in {}...",
                validated.display_name
            )))
        })
        .resolve()?;

    let icon_light = icon::resolve(IconSpec {
        target: "light mode icon",
        file: settings.icon_file_light.as_deref(),
        url: settings.icon_url_light.as_deref(),
        default_name: DEFAULT_ICON_LIGHT,
        file_key: KEY_ICON_FILE_LIGHT,
        url_key: KEY_ICON_URL_LIGHT,
        base_dir,
        fallback: None,
    })?;

    let icon_dark = icon::resolve(IconSpec {
        target: "dark mode icon",
        file: settings.icon_file_dark.as_deref(),
        url: settings.icon_url_dark.as_deref(),
        default_name: DEFAULT_ICON_DARK,
        file_key: KEY_ICON_FILE_DARK,
        url_key: KEY_ICON_URL_DARK,
        base_dir,
        fallback: Some(&icon_light),
    })?;

    let (test_user_emails, email_warnings) =
        validation::parse_test_emails(settings.test_user_emails.as_deref());
    warnings.extend(email_warnings);

    let (object_definitions, warning) = files::load_object_definitions(base_dir);
    warnings.extend(warning);
    let (quick_links, warning) = files::load_quick_links(base_dir);
    warnings.extend(warning);

    Ok(Assembled {
        config: DatasourceConfig {
            id: validated.id,
            display_name: validated.display_name,
            category: validated.category,
            home_url: validated.home_url,
            url_regex,
            suggestion_text,
            user_referenced_by_email: validated.user_referenced_by_email,
            is_test_mode: validated.is_test_mode,
            test_user_emails,
            icon_light,
            icon_dark,
            object_definitions,
            quick_links,
        },
        warnings,
    })
}

/// Default URL regex: the home URL's scheme and host followed by `/.*`.
fn derive_url_regex(home_url: &str) -> String {
    let origin = match home_url.find("://") {
        Some(i) => {
            let after_scheme = i + 3;
            match home_url[after_scheme..].find('/') {
                Some(j) => &home_url[..after_scheme + j],
                None => home_url.trim_end_matches('/'),
            }
        }
        None => home_url.trim_end_matches('/'),
    };
    format!("{origin}/.*")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::category::Category;
    use crate::resolve::icon::{encode_data_url, MIME_PNG};

    fn settings() -> EnvSettings {
        EnvSettings {
            display_name: Some("My App".to_string()),
            id: Some("my-app".to_string()),
            home_url: Some("https://app.example.com/dash".to_string()),
            ..EnvSettings::default()
        }
    }

    fn dir_with_light_icon() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_ICON_LIGHT), b"light-bytes").unwrap();
        dir
    }

    #[test]
    fn test_assemble_defaults() {
        let dir = dir_with_light_icon();
        let assembled = assemble(&settings(), dir.path()).unwrap();
        let config = assembled.config;

        assert_eq!(config.id, "my-app");
        assert_eq!(config.category, Category::KnowledgeHub);
        assert_eq!(config.url_regex, "https://app.example.com/.*");
        assert_eq!(config.suggestion_text, "Search for anything in My App...");
        assert!(config.user_referenced_by_email);
        assert!(config.is_test_mode);
        assert!(config.object_definitions.is_empty());
        assert!(config.quick_links.is_empty());
        assert!(assembled.warnings.is_empty());
    }

    #[test]
    fn test_dark_icon_inherits_light_exactly() {
        let dir = dir_with_light_icon();
        let config = assemble(&settings(), dir.path()).unwrap().config;

        let expected = encode_data_url(MIME_PNG, b"light-bytes");
        assert_eq!(config.icon_light, expected);
        assert_eq!(config.icon_dark, expected);
    }

    #[test]
    fn test_dark_icon_prefers_own_default_file() {
        let dir = dir_with_light_icon();
        fs::write(dir.path().join(DEFAULT_ICON_DARK), b"dark-bytes").unwrap();

        let config = assemble(&settings(), dir.path()).unwrap().config;
        assert_eq!(config.icon_dark, encode_data_url(MIME_PNG, b"dark-bytes"));
        assert_ne!(config.icon_dark, config.icon_light);
    }

    #[test]
    fn test_explicit_url_regex_wins() {
        let dir = dir_with_light_icon();
        let mut env = settings();
        env.url_regex = Some("https://docs.example.com/.*".to_string());

        let config = assemble(&env, dir.path()).unwrap().config;
        assert_eq!(config.url_regex, "https://docs.example.com/.*");
    }

    #[test]
    fn test_test_emails_filtered_with_warning() {
        let dir = dir_with_light_icon();
        let mut env = settings();
        env.test_user_emails = Some("a@b.com, not-an-email, c@d.co".to_string());

        let assembled = assemble(&env, dir.path()).unwrap();
        assert_eq!(
            assembled.config.test_user_emails,
            vec!["a@b.com".to_string(), "c@d.co".to_string()]
        );
        assert_eq!(assembled.warnings.len(), 1);
        assert!(assembled.warnings[0].contains("not-an-email"));
    }

    #[test]
    fn test_missing_light_icon_fails_resolution() {
        let dir = TempDir::new().unwrap();
        let err = assemble(&settings(), dir.path()).unwrap_err();
        assert!(matches!(err, AssembleError::Resolution(_)));
    }

    #[test]
    fn test_validation_failures_batched() {
        let dir = dir_with_light_icon();
        let env = EnvSettings {
            display_name: Some("Bad/".to_string()),
            id: Some("BAD".to_string()),
            ..EnvSettings::default()
        };

        match assemble(&env, dir.path()).unwrap_err() {
            AssembleError::Validation(errors) => {
                // display name, id, and missing home URL all reported
                assert!(errors.0.len() >= 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_aux_file_warns_but_assembles() {
        let dir = dir_with_light_icon();
        fs::write(dir.path().join(files::OBJECT_TYPES_FILE), "{broken").unwrap();

        let assembled = assemble(&settings(), dir.path()).unwrap();
        assert!(assembled.config.object_definitions.is_empty());
        assert_eq!(assembled.warnings.len(), 1);
    }

    #[test]
    fn test_derive_url_regex() {
        assert_eq!(
            derive_url_regex("https://app.example.com/dash"),
            "https://app.example.com/.*"
        );
        assert_eq!(
            derive_url_regex("https://app.example.com"),
            "https://app.example.com/.*"
        );
        assert_eq!(
            derive_url_regex("http://app.example.com/"),
            "http://app.example.com/.*"
        );
    }
}
