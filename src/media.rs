//! Media resource for the VoiceBase API.

use std::sync::Arc;

use reqwest::multipart;
use serde_json::Value;

use crate::{
    error::{Result, require_arg},
    http::{DeleteOutcome, HttpClient, RequestSpec, is_empty_json},
};

/// The `/media` resource: media files uploaded for analysis, plus the
/// transcripts and analytics generated from processing them.
#[derive(Debug)]
pub struct MediaService {
    http: Arc<HttpClient>,
    base_url: String,
}

/// The primary payload of an upload: either a URL the service fetches the
/// media from, or the file content attached to the request. The two are
/// mutually exclusive per call.
#[derive(Debug, Clone)]
pub enum MediaSource {
    /// Publicly reachable URL of the media, sent as the `mediaUrl` form field.
    Url(String),
    /// Raw media content, sent as the `media` file part.
    File { filename: String, data: Vec<u8> },
}

impl MediaSource {
    fn into_form(self) -> Result<multipart::Form> {
        match self {
            MediaSource::Url(url) => {
                require_arg("media", &url)?;
                Ok(multipart::Form::new().text("mediaUrl", url))
            }
            MediaSource::File { filename, data } => Ok(multipart::Form::new()
                .part("media", multipart::Part::bytes(data).file_name(filename))),
        }
    }
}

/// Optional JSON attachments accepted by upload and reprocess calls. Each
/// field is serialized to a JSON string and placed in the multipart form under
/// its own name; absent or empty fields are omitted from the payload entirely.
#[derive(Debug, Clone, Default)]
pub struct MediaOptions {
    /// Processing configuration options.
    pub configuration: Option<Value>,
    /// Metadata about the file being posted.
    pub metadata: Option<Value>,
    /// A transcript to attach instead of having one generated.
    pub transcript: Option<Value>,
}

impl MediaOptions {
    fn apply(&self, mut form: multipart::Form) -> Result<multipart::Form> {
        for (name, value) in [
            ("configuration", &self.configuration),
            ("metadata", &self.metadata),
            ("transcript", &self.transcript),
        ] {
            if let Some(value) = value {
                if !is_empty_json(value) {
                    form = form.text(name, serde_json::to_string(value)?);
                }
            }
        }
        Ok(form)
    }
}

impl MediaService {
    pub(crate) fn new(http: Arc<HttpClient>, base_url: &str, api_version: &str) -> Self {
        Self {
            http,
            base_url: format!("{base_url}/{api_version}/media"),
        }
    }

    /// Returns the resource's base URL, `{baseUrl}/{apiVersion}/media`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieves the media collection, optionally filtered by the external
    /// identifier set in metadata on upload.
    pub async fn list(&self, external_id: Option<&str>) -> Result<Value> {
        let spec = RequestSpec::get(&self.base_url).query("externalId", external_id);
        self.http.execute(spec).await
    }

    /// Uploads new media to the service as an attachment or from a URL.
    ///
    /// ```rust,no_run
    /// # use voicebase::{Client, MediaOptions, MediaSource};
    /// # #[tokio::main]
    /// # async fn main() -> voicebase::Result<()> {
    /// # let client = Client::builder("token").build()?;
    /// let media = client
    ///     .media()
    ///     .upload(
    ///         MediaSource::Url("https://example.com/call.mp3".to_string()),
    ///         &MediaOptions {
    ///             configuration: Some(serde_json::json!({"language": "en-US"})),
    ///             ..Default::default()
    ///         },
    ///     )
    ///     .await?;
    /// println!("media id: {}", media["mediaId"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload(&self, source: MediaSource, options: &MediaOptions) -> Result<Value> {
        let form = options.apply(source.into_form()?)?;
        let spec = RequestSpec::post(&self.base_url).form(form);
        self.http.execute(spec).await
    }

    /// Gets a media item and its associated analytics.
    pub async fn get(&self, media_id: &str) -> Result<Value> {
        require_arg("mediaId", media_id)?;
        let spec = RequestSpec::get(format!("{}/{media_id}", self.base_url));
        self.http.execute(spec).await
    }

    /// Deletes a media item. Returns the response status (expected 204)
    /// alongside the body.
    pub async fn delete(&self, media_id: &str) -> Result<DeleteOutcome> {
        require_arg("mediaId", media_id)?;
        let spec = RequestSpec::delete(format!("{}/{media_id}", self.base_url));
        let (status, body) = self.http.execute_with_status(spec).await?;
        Ok(DeleteOutcome { status, body })
    }

    /// Uploads new configuration, metadata and/or transcript for reprocessing
    /// of an existing media item.
    pub async fn update(&self, media_id: &str, options: &MediaOptions) -> Result<Value> {
        require_arg("mediaId", media_id)?;
        let form = options.apply(multipart::Form::new())?;
        let spec = RequestSpec::post(format!("{}/{media_id}", self.base_url)).form(form);
        self.http.execute(spec).await
    }

    /// Gets the transcript for a media item.
    ///
    /// Alternate formats are requested through repeated
    /// `includeAlternateFormat=` query parameters, one per requested format.
    pub async fn transcript(
        &self,
        media_id: &str,
        include_alternate_formats: Option<&[&str]>,
    ) -> Result<Value> {
        require_arg("mediaId", media_id)?;
        let mut url = format!("{}/{media_id}/transcript", self.base_url);
        if let Some(formats) = include_alternate_formats {
            for (i, format) in formats.iter().enumerate() {
                url.push(if i == 0 { '?' } else { '&' });
                url.push_str("includeAlternateFormat=");
                url.push_str(format);
            }
        }
        self.http.execute(RequestSpec::get(url)).await
    }

    /// Gets the processing progress phases for a media item.
    pub async fn progress(&self, media_id: &str) -> Result<Value> {
        require_arg("mediaId", media_id)?;
        let spec = RequestSpec::get(format!("{}/{media_id}/progress", self.base_url));
        self.http.execute(spec).await
    }

    /// Gets the available stream URLs for a media item.
    pub async fn streams(&self, media_id: &str) -> Result<Value> {
        require_arg("mediaId", media_id)?;
        let spec = RequestSpec::get(format!("{}/{media_id}/streams", self.base_url));
        self.http.execute(spec).await
    }

    /// Fetches the redirect to the original version of the media file.
    pub async fn original_file(&self, media_id: &str) -> Result<Value> {
        require_arg("mediaId", media_id)?;
        let spec = RequestSpec::get(format!("{}/{media_id}/streams/original", self.base_url));
        self.http.execute(spec).await
    }

    /// Gets the metadata of a media item.
    pub async fn metadata(&self, media_id: &str) -> Result<Value> {
        require_arg("mediaId", media_id)?;
        let spec = RequestSpec::get(format!("{}/{media_id}/metadata", self.base_url));
        self.http.execute(spec).await
    }

    /// Replaces the metadata of a media item.
    pub async fn update_metadata(&self, media_id: &str, metadata: &Value) -> Result<Value> {
        require_arg("mediaId", media_id)?;
        let spec = RequestSpec::put(format!("{}/{media_id}/metadata", self.base_url))
            .json(metadata.clone());
        self.http.execute(spec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_media_url_is_rejected() {
        let err = MediaSource::Url(String::new()).into_form().unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
