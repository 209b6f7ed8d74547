//! # dsctl
//!
//! Core library for the Datasource Configuration Sync Tool.
//!
//! This library assembles a validated datasource configuration from
//! environment variables and local definition files, synchronizes it
//! with a remote enterprise-search indexing API, and exports remote
//! records back into the same local file layout for round-trip editing.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Category enumeration and remote tag mapping
pub mod category;

/// Configuration assembly from environment and local files
pub mod config;

/// Error taxonomy
pub mod error;

/// Pull-path export of remote records to local files
pub mod export;

/// Remote indexing API boundary
pub mod remote;

/// Plain-text summaries for command output
pub mod report;

/// Fallback chain evaluation
pub mod resolve;

/// Push synchronization engine and wire translation
pub mod sync;

/// Sample file scaffolding
pub mod template;
