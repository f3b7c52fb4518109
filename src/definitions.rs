//! Definitions resource for the VoiceBase API.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::{Result, require_arg},
    http::{DeleteOutcome, HttpClient, RequestSpec},
};

/// The `/definitions` resource: reference data used during processing,
/// including keyword spotting groups, custom vocabularies, custom search
/// fields and predictive models.
#[derive(Debug)]
pub struct DefinitionsService {
    http: Arc<HttpClient>,
    base_url: String,
}

impl DefinitionsService {
    pub(crate) fn new(http: Arc<HttpClient>, base_url: &str, api_version: &str) -> Self {
        Self {
            http,
            base_url: format!("{base_url}/{api_version}/definitions"),
        }
    }

    /// Returns the resource's base URL, `{baseUrl}/{apiVersion}/definitions`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- keywords ----

    /// Gets the definition types available for keywords.
    pub async fn keyword_definitions(&self) -> Result<Value> {
        let spec = RequestSpec::get(format!("{}/keywords", self.base_url));
        self.http.execute(spec).await
    }

    /// Gets all defined keyword groups.
    pub async fn keyword_groups(&self) -> Result<Value> {
        let spec = RequestSpec::get(format!("{}/keywords/groups", self.base_url));
        self.http.execute(spec).await
    }

    /// Gets one keyword group.
    pub async fn keyword_group(&self, group_id: &str) -> Result<Value> {
        require_arg("groupId", group_id)?;
        let spec = RequestSpec::get(format!("{}/keywords/groups/{group_id}", self.base_url));
        self.http.execute(spec).await
    }

    /// Creates or updates a keyword group.
    pub async fn create_or_update_keyword_group(
        &self,
        group_id: &str,
        group: &Value,
    ) -> Result<Value> {
        require_arg("groupId", group_id)?;
        let spec = RequestSpec::put(format!("{}/keywords/groups/{group_id}", self.base_url))
            .json(group.clone());
        self.http.execute(spec).await
    }

    /// Deletes a keyword group.
    pub async fn delete_keyword_group(&self, group_id: &str) -> Result<DeleteOutcome> {
        require_arg("groupId", group_id)?;
        let spec = RequestSpec::delete(format!("{}/keywords/groups/{group_id}", self.base_url));
        let (status, body) = self.http.execute_with_status(spec).await?;
        Ok(DeleteOutcome { status, body })
    }

    // ---- transcripts ----

    /// Gets the definition types available for transcripts.
    pub async fn transcript_definitions(&self) -> Result<Value> {
        let spec = RequestSpec::get(format!("{}/transcripts", self.base_url));
        self.http.execute(spec).await
    }

    /// Gets all defined custom vocabularies.
    pub async fn vocabularies(&self) -> Result<Value> {
        let spec = RequestSpec::get(format!("{}/transcripts/vocabularies", self.base_url));
        self.http.execute(spec).await
    }

    /// Gets one custom vocabulary.
    pub async fn vocabulary(&self, vocabulary_id: &str) -> Result<Value> {
        require_arg("vocabularyId", vocabulary_id)?;
        let spec = RequestSpec::get(format!(
            "{}/transcripts/vocabularies/{vocabulary_id}",
            self.base_url
        ));
        self.http.execute(spec).await
    }

    /// Creates a custom vocabulary from a set of terms.
    pub async fn create_vocabulary(&self, vocabulary_id: &str, data: &Value) -> Result<Value> {
        require_arg("vocabularyId", vocabulary_id)?;
        let spec = RequestSpec::put(format!(
            "{}/transcripts/vocabularies/{vocabulary_id}",
            self.base_url
        ))
        .json(data.clone());
        self.http.execute(spec).await
    }

    /// Deletes a custom vocabulary.
    pub async fn delete_vocabulary(&self, vocabulary_id: &str) -> Result<DeleteOutcome> {
        require_arg("vocabularyId", vocabulary_id)?;
        let spec = RequestSpec::delete(format!(
            "{}/transcripts/vocabularies/{vocabulary_id}",
            self.base_url
        ));
        let (status, body) = self.http.execute_with_status(spec).await?;
        Ok(DeleteOutcome { status, body })
    }

    // ---- media search ----

    /// Gets the definition types available for media.
    pub async fn media_definitions(&self) -> Result<Value> {
        let spec = RequestSpec::get(format!("{}/media", self.base_url));
        self.http.execute(spec).await
    }

    /// Gets the searchable custom metadata fields.
    pub async fn searchable_fields(&self) -> Result<Value> {
        let spec = RequestSpec::get(format!("{}/media/search", self.base_url));
        self.http.execute(spec).await
    }

    /// Creates or updates the custom metadata fields available to search.
    pub async fn create_or_update_search_fields(&self, data: &Value) -> Result<Value> {
        let spec =
            RequestSpec::put(format!("{}/media/search", self.base_url)).json(data.clone());
        self.http.execute(spec).await
    }

    // ---- predictions ----

    /// Gets the definition types available for predictions.
    pub async fn prediction_definitions(&self) -> Result<Value> {
        let spec = RequestSpec::get(format!("{}/predictions", self.base_url));
        self.http.execute(spec).await
    }

    /// Gets all available predictive models.
    pub async fn predictive_models(&self) -> Result<Value> {
        let spec = RequestSpec::get(format!("{}/predictions/models", self.base_url));
        self.http.execute(spec).await
    }

    /// Gets one predictive model by name.
    pub async fn predictive_model(&self, model_name: &str) -> Result<Value> {
        require_arg("modelName", model_name)?;
        let spec = RequestSpec::get(format!("{}/predictions/models/{model_name}", self.base_url));
        self.http.execute(spec).await
    }
}
