//! Push orchestration
//!
//! Decides create-vs-update against the remote record and enforces the
//! overwrite-confirmation invariant. The confirmation is injected as a
//! callback so the engine runs without a terminal in tests and scripts.

use super::wire::{self, RemoteDatasource};
use super::SyncOutcome;
use crate::config::DatasourceConfig;
use crate::error::SyncError;
use crate::remote::DatasourceApi;

/// Callback asked before overwriting an existing remote record. Receives
/// the current remote record; returning `false` aborts the push.
pub type ConfirmOverwrite<'a> = &'a mut dyn FnMut(&RemoteDatasource) -> std::io::Result<bool>;

/// Push engine for one datasource record.
pub struct SyncEngine<'a> {
    api: &'a dyn DatasourceApi,
}

impl<'a> SyncEngine<'a> {
    /// Create an engine over the given remote boundary.
    #[must_use]
    pub fn new(api: &'a dyn DatasourceApi) -> Self {
        Self { api }
    }

    /// Create or update the remote record for `config`.
    ///
    /// The record is addressed by `config.id` and only ever overwritten,
    /// never renamed. The remote signals absence through an error rather
    /// than a typed empty result, so any retrieval failure falls through
    /// to creation; this behavior is deliberate and load-bearing.
    ///
    /// With `force` the confirmation callback is skipped. A declined
    /// confirmation yields [`SyncOutcome::Aborted`], which is a
    /// successful no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`SyncError`] when the upsert call fails or the
    /// confirmation callback cannot be read.
    pub fn push(
        &self,
        config: &DatasourceConfig,
        force: bool,
        confirm: ConfirmOverwrite<'_>,
    ) -> Result<SyncOutcome, SyncError> {
        let record = wire::to_remote(config);

        match self.api.retrieve(&config.id) {
            Err(_) => {
                self.api.upsert(&record)?;
                Ok(SyncOutcome::Created)
            }
            Ok(existing) => {
                if !force && !confirm(&existing)? {
                    return Ok(SyncOutcome::Aborted);
                }
                self.api.upsert(&record)?;
                Ok(SyncOutcome::Updated)
            }
        }
    }
}
