//! Error taxonomy for the reconciliation engine
//!
//! All failures are values returned to the caller; nothing in the library
//! exits the process. The CLI layer decides exit codes and user messaging.

use std::fmt;

use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Environment key of the offending field
    pub field: &'static str,
    /// Human-readable description of the problem
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for a field
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All validation failures from one assembly pass, reported as a batch
/// so the user sees every problem at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "configuration is invalid ({} problem(s)):", self.0.len())?;
        for err in &self.0 {
            writeln!(f, "  - {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A fallback chain failed to produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// A candidate was explicitly specified but unusable. The chain stops
    /// here instead of falling through to later candidates.
    #[error("{target}: {candidate} is invalid: {reason}")]
    InvalidCandidate {
        /// Field being resolved
        target: &'static str,
        /// Name of the offending candidate
        candidate: &'static str,
        /// Why the candidate could not produce a value
        reason: String,
    },

    /// Every candidate in the chain was unspecified.
    #[error("{target}: no value could be resolved.\n{help}")]
    Exhausted {
        /// Field being resolved
        target: &'static str,
        /// Actionable list of the ways a value can be supplied
        help: String,
    },
}

/// An unknown category tag was received from the remote system.
///
/// Only the pull path raises this; the push path maps unknown tags to a
/// default instead (outbound data is always well-typed local, inbound
/// remote data may contain values added later by the remote service).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category tag '{tag}'")]
pub struct MappingError {
    /// The unrecognized tag
    pub tag: String,
}

/// A remote call failed.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never completed (connection, TLS, timeout, ...)
    #[error("request to {url} failed: {source}")]
    Request {
        /// Endpoint URL
        url: String,
        /// Underlying transport failure
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Endpoint URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be decoded
    #[error("invalid response from {url}: {source}")]
    Decode {
        /// Endpoint URL
        url: String,
        /// Underlying decode failure
        #[source]
        source: reqwest::Error,
    },
}

/// Assembly can fail either on field validation or on a fallback chain.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// One or more fields failed validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A fallback chain failed
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Push-path failure.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The upsert call failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The overwrite confirmation could not be read
    #[error("overwrite confirmation failed: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Pull-path export failure that aborts the whole operation.
///
/// Per-artifact failures do not use this type; they are recorded in the
/// export manifest so sibling artifacts still get written.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The remote record carries a category tag this build does not know
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// The export directory could not be created
    #[error("failed to create {dir}: {source}")]
    CreateDir {
        /// Target directory
        dir: String,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}
