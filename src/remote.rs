//! Remote indexing API boundary
//!
//! The remote system is a collaborator, consumed through two operations:
//! retrieve a datasource record by ID, and create-or-update by ID (the
//! remote treats both as one idempotent upsert keyed by the record name).
//! Authentication is an opaque bearer credential plus an instance
//! identifier. Calls are blocking with no internal retry; failures
//! surface immediately as typed errors.

use serde_json::json;

use crate::error::TransportError;
use crate::sync::wire::RemoteDatasource;

/// Operations the reconciliation engine needs from the remote system.
pub trait DatasourceApi {
    /// Fetch the datasource record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on any failure. Note the remote
    /// signals absence through an error as well; callers on the push
    /// path treat any retrieval failure as "not found".
    fn retrieve(&self, id: &str) -> Result<RemoteDatasource, TransportError>;

    /// Create or update the record keyed by `record.name`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the call fails.
    fn upsert(&self, record: &RemoteDatasource) -> Result<(), TransportError>;
}

/// HTTP implementation of the indexing API.
pub struct HttpApi {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl HttpApi {
    /// Create a client for the given instance and credential.
    ///
    /// The instance identifier is either a bare instance name, expanded
    /// to the conventional backend domain, or a full `http(s)://` base
    /// URL for self-addressed deployments.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(instance: &str, api_key: &str) -> Result<Self, TransportError> {
        let base_url = base_url_for(instance);
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| TransportError::Request {
                url: base_url.clone(),
                source: e,
            })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }
}

fn base_url_for(instance: &str) -> String {
    if instance.starts_with("http://") || instance.starts_with("https://") {
        format!("{}/api/index/v1", instance.trim_end_matches('/'))
    } else {
        format!("https://{instance}-be.glean.com/api/index/v1")
    }
}

impl DatasourceApi for HttpApi {
    fn retrieve(&self, id: &str) -> Result<RemoteDatasource, TransportError> {
        let url = format!("{}/getdatasourceconfig", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({ "datasource": id }))
            .send()
            .map_err(|e| TransportError::Request {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<RemoteDatasource>()
            .map_err(|e| TransportError::Decode { url, source: e })
    }

    fn upsert(&self, record: &RemoteDatasource) -> Result<(), TransportError> {
        let url = format!("{}/adddatasource", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(record)
            .send()
            .map_err(|e| TransportError::Request {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
