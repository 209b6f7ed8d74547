//! Datasource category enumeration and remote tag mapping
//!
//! The local enum and the remote API's tag strings cover the same closed
//! 15-value set. Mapping is strict on the pull path (an unknown remote tag
//! is a [`MappingError`]) and lenient on the push path, where unknown or
//! unspecified tags default to [`Category::KnowledgeHub`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// Datasource content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Reference documentation updated as a source of truth
    KnowledgeHub,
    /// Content published at a point in time, such as blog posts
    PublishedContent,
    /// Documents edited collaboratively
    CollaborativeContent,
    /// Question-answer content
    QuestionAnswer,
    /// Work item or issue trackers
    Tickets,
    /// Source code repositories
    CodeRepository,
    /// Code change management systems
    ChangeManagement,
    /// Email content
    Email,
    /// Chat or conversational content
    Messaging,
    /// Customer relationship management systems
    Crm,
    /// Single-sign-on services
    Sso,
    /// Applicant tracking systems
    Ats,
    /// Employee data; should be uploaded through the people API instead
    People,
    /// Reserved by the remote platform
    ExternalShortcut,
    /// Reserved by the remote platform
    Uncategorized,
}

/// All categories, in display order.
const ALL: [Category; 15] = [
    Category::KnowledgeHub,
    Category::PublishedContent,
    Category::CollaborativeContent,
    Category::QuestionAnswer,
    Category::Tickets,
    Category::CodeRepository,
    Category::ChangeManagement,
    Category::Email,
    Category::Messaging,
    Category::Crm,
    Category::Sso,
    Category::Ats,
    Category::People,
    Category::ExternalShortcut,
    Category::Uncategorized,
];

impl Category {
    /// Remote API tag for this category.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::KnowledgeHub => "KNOWLEDGE_HUB",
            Self::PublishedContent => "PUBLISHED_CONTENT",
            Self::CollaborativeContent => "COLLABORATIVE_CONTENT",
            Self::QuestionAnswer => "QUESTION_ANSWER",
            Self::Tickets => "TICKETS",
            Self::CodeRepository => "CODE_REPOSITORY",
            Self::ChangeManagement => "CHANGE_MANAGEMENT",
            Self::Email => "EMAIL",
            Self::Messaging => "MESSAGING",
            Self::Crm => "CRM",
            Self::Sso => "SSO",
            Self::Ats => "ATS",
            Self::People => "PEOPLE",
            Self::ExternalShortcut => "EXTERNAL_SHORTCUT",
            Self::Uncategorized => "UNCATEGORIZED",
        }
    }

    /// Parse a remote tag, failing on anything outside the closed set.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] for unknown tags. This is the pull-path
    /// behavior; the push path uses [`Category::from_tag_or_default`].
    pub fn from_tag(tag: &str) -> Result<Self, MappingError> {
        ALL.iter()
            .copied()
            .find(|c| c.as_tag() == tag)
            .ok_or_else(|| MappingError {
                tag: tag.to_string(),
            })
    }

    /// Parse a tag, defaulting unknown or unspecified values to
    /// [`Category::KnowledgeHub`]. Push-path behavior.
    #[must_use]
    pub fn from_tag_or_default(tag: Option<&str>) -> Self {
        tag.and_then(|t| Self::from_tag(t).ok())
            .unwrap_or(Self::KnowledgeHub)
    }

    /// Categories usable for new datasources.
    ///
    /// `PEOPLE`, `EXTERNAL_SHORTCUT` and `UNCATEGORIZED` are excluded from
    /// choice lists but remain accepted when supplied directly.
    #[must_use]
    pub fn usable() -> Vec<Self> {
        ALL.iter()
            .copied()
            .filter(|c| {
                !matches!(
                    c,
                    Self::People | Self::ExternalShortcut | Self::Uncategorized
                )
            })
            .collect()
    }

    /// Human-readable description, shown by the categories listing.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::KnowledgeHub => {
                "Reference documentation that may be continually updated as a source of truth, \
                 such as READMEs, wiki pages, or knowledge articles"
            }
            Self::PublishedContent => {
                "Blog posts or announcements published at a point in time"
            }
            Self::CollaborativeContent => {
                "Documents that can be edited collaboratively, such as shared drive files"
            }
            Self::QuestionAnswer => "Question-answer content such as forum posts",
            Self::Tickets => "Work item or issue trackers such as tasks, tickets, or issues",
            Self::CodeRepository => "Source code repositories",
            Self::ChangeManagement => "Code change management systems such as pull or merge requests",
            Self::Email => "Email messages",
            Self::Messaging => "Chat message or conversational content",
            Self::Crm => "Customer relationship management systems",
            Self::Sso => "Single-sign-on services",
            Self::Ats => "Applicant tracking systems",
            Self::People => {
                "Not intended for custom datasources; upload employee data through the people API"
            }
            Self::ExternalShortcut => "Not intended for custom datasources",
            Self::Uncategorized => "Not intended for custom datasources",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::KnowledgeHub
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
