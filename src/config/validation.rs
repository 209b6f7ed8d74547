//! Field-level validation for assembly
//!
//! Every failing field is collected so the user sees all problems in one
//! pass instead of fixing them one rerun at a time.

use std::sync::LazyLock;

use regex::Regex;

use crate::category::Category;
use crate::config::env::{
    EnvSettings, KEY_CATEGORY, KEY_DISPLAY_NAME, KEY_HOME_URL, KEY_ID, KEY_IS_TEST_MODE,
    KEY_USER_BY_EMAIL,
};
use crate::error::{ValidationError, ValidationErrors};

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("static regex"));
static HOME_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("static regex"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("static regex")
});

/// Maximum display name length accepted by the remote platform
pub const MAX_DISPLAY_NAME_LEN: usize = 50;

const FORBIDDEN_NAME_ENDINGS: [char; 4] = ['/', ';', ':', ','];

/// Identity fields after successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    /// Datasource ID slug
    pub id: String,
    /// Display name
    pub display_name: String,
    /// Parsed category; defaults to `KNOWLEDGE_HUB` when unset
    pub category: Category,
    /// Home URL
    pub home_url: String,
    /// Whether users are referenced by email; defaults to true
    pub user_referenced_by_email: bool,
    /// Whether the datasource starts in test mode; defaults to true
    pub is_test_mode: bool,
}

/// Validate the required identity fields and typed flags.
///
/// # Errors
///
/// Returns every field failure batched in a [`ValidationErrors`].
pub fn validate(settings: &EnvSettings) -> Result<Validated, ValidationErrors> {
    let mut errors = Vec::new();

    let display_name = match settings.display_name.as_deref() {
        None => {
            errors.push(ValidationError::new(KEY_DISPLAY_NAME, "is required"));
            String::new()
        }
        Some(name) => {
            validate_display_name(name, &mut errors);
            name.to_string()
        }
    };

    let id = match settings.id.as_deref() {
        None => {
            errors.push(ValidationError::new(KEY_ID, "is required"));
            String::new()
        }
        Some(id) => {
            if !ID_RE.is_match(id) {
                errors.push(ValidationError::new(
                    KEY_ID,
                    format!("'{id}' must contain only lowercase letters, numbers, and hyphens"),
                ));
            }
            id.to_string()
        }
    };

    let home_url = match settings.home_url.as_deref() {
        None => {
            errors.push(ValidationError::new(KEY_HOME_URL, "is required"));
            String::new()
        }
        Some(url) => {
            if !HOME_URL_RE.is_match(url) {
                errors.push(ValidationError::new(
                    KEY_HOME_URL,
                    format!("'{url}' must start with http:// or https://"),
                ));
            }
            url.to_string()
        }
    };

    let category = match settings.category.as_deref() {
        None => Category::default(),
        Some(tag) => match Category::from_tag(tag) {
            Ok(category) => category,
            Err(_) => {
                errors.push(ValidationError::new(
                    KEY_CATEGORY,
                    format!("'{tag}' is not a known category"),
                ));
                Category::default()
            }
        },
    };

    let user_referenced_by_email = parse_bool_field(
        settings.user_referenced_by_email.as_deref(),
        KEY_USER_BY_EMAIL,
        true,
        &mut errors,
    );
    let is_test_mode = parse_bool_field(
        settings.is_test_mode.as_deref(),
        KEY_IS_TEST_MODE,
        true,
        &mut errors,
    );

    if errors.is_empty() {
        Ok(Validated {
            id,
            display_name,
            category,
            home_url,
            user_referenced_by_email,
            is_test_mode,
        })
    } else {
        Err(ValidationErrors(errors))
    }
}

fn validate_display_name(name: &str, errors: &mut Vec<ValidationError>) {
    if name != name.trim() {
        errors.push(ValidationError::new(
            KEY_DISPLAY_NAME,
            "cannot have leading or trailing whitespace",
        ));
    }
    if name.chars().count() > MAX_DISPLAY_NAME_LEN {
        errors.push(ValidationError::new(
            KEY_DISPLAY_NAME,
            format!("must be at most {MAX_DISPLAY_NAME_LEN} characters"),
        ));
    }
    if name
        .chars()
        .last()
        .is_some_and(|c| FORBIDDEN_NAME_ENDINGS.contains(&c))
    {
        errors.push(ValidationError::new(
            KEY_DISPLAY_NAME,
            "cannot end with symbols like /, ;, :, ,",
        ));
    }
}

fn parse_bool_field(
    value: Option<&str>,
    key: &'static str,
    default: bool,
    errors: &mut Vec<ValidationError>,
) -> bool {
    match value {
        None => default,
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => {
                errors.push(ValidationError::new(
                    key,
                    format!("'{raw}' is not a boolean (use true or false)"),
                ));
                default
            }
        },
    }
}

/// Split a comma-separated email list, dropping invalid entries with a
/// warning. Never fatal.
#[must_use]
pub fn parse_test_emails(raw: Option<&str>) -> (Vec<String>, Vec<String>) {
    let mut emails = Vec::new();
    let mut warnings = Vec::new();

    let Some(raw) = raw else {
        return (emails, warnings);
    };

    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if EMAIL_RE.is_match(entry) {
            emails.push(entry.to_string());
        } else {
            warnings.push(format!("invalid email format: {entry} (skipped)"));
        }
    }

    (emails, warnings)
}
