//! Idempotent push synchronization
//!
//! Given an assembled configuration, this module decides create-vs-update
//! against the remote system, enforces the overwrite confirmation, and
//! translates the local record into the remote wire shape. Create and
//! update share one upsert operation keyed by the datasource ID.

mod orchestrator;
pub mod wire;

pub use orchestrator::{ConfirmOverwrite, SyncEngine};

/// Outcome of one push.
///
/// Failures are not an outcome; they surface as [`crate::error::SyncError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No record existed under the ID; one was created
    Created,
    /// An existing record was overwritten
    Updated,
    /// The user declined the overwrite; successful no-op
    Aborted,
}
