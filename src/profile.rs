//! Profile resource for the VoiceBase API.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::{Result, require_arg},
    http::{DeleteOutcome, HttpClient, RequestSpec},
};

/// The `/profile` resource: user profile information and management of API
/// keys for the current account.
#[derive(Debug)]
pub struct ProfileService {
    http: Arc<HttpClient>,
    base_url: String,
}

impl ProfileService {
    pub(crate) fn new(http: Arc<HttpClient>, base_url: &str, api_version: &str) -> Self {
        Self {
            http,
            base_url: format!("{base_url}/{api_version}/profile"),
        }
    }

    /// Returns the resource's base URL, `{baseUrl}/{apiVersion}/profile`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists all API keys of the current user.
    pub async fn keys(&self) -> Result<Value> {
        let spec = RequestSpec::get(format!("{}/keys", self.base_url));
        self.http.execute(spec).await
    }

    /// Gets one API key.
    pub async fn key(&self, key_id: &str) -> Result<Value> {
        require_arg("keyId", key_id)?;
        let spec = RequestSpec::get(format!("{}/keys/{key_id}", self.base_url));
        self.http.execute(spec).await
    }

    /// Creates a new API key for the current user.
    pub async fn create_key(&self, key: &Value) -> Result<Value> {
        let spec = RequestSpec::post(format!("{}/keys", self.base_url)).json(key.clone());
        self.http.execute(spec).await
    }

    /// Deletes and revokes an API key.
    pub async fn delete_key(&self, key_id: &str) -> Result<DeleteOutcome> {
        require_arg("keyId", key_id)?;
        let spec = RequestSpec::delete(format!("{}/keys/{key_id}", self.base_url));
        let (status, body) = self.http.execute_with_status(spec).await?;
        Ok(DeleteOutcome { status, body })
    }
}
