//! VoiceBase API client.

use std::sync::Arc;
use std::time::Duration;

use crate::{
    definitions::DefinitionsService,
    error::{Error, Result},
    http::HttpClient,
    media::MediaService,
    profile::ProfileService,
};

/// Default VoiceBase API base URL.
pub const DEFAULT_BASE_URL: &str = "https://apis.voicebase.com";

/// Default VoiceBase REST API version, appended after the base URL in front of
/// every endpoint.
pub const DEFAULT_API_VERSION: &str = "v2-beta";

/// The v3 API version, for deployments targeting it.
pub const API_VERSION_V3: &str = "v3";

/// Default connection timeout.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default response timeout.
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_millis(80_000);

/// VoiceBase API client.
///
/// Holds the shared configuration and exposes one service per API resource.
/// The configuration is fixed at construction; build a new client to change
/// it.
///
/// # Example
///
/// ```rust,no_run
/// use voicebase::Client;
///
/// # fn main() -> voicebase::Result<()> {
/// let client = Client::builder("your-bearer-token").build()?;
///
/// // client.media(), client.definitions() and client.profile() give access
/// // to the API resources.
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    base_url: String,
    api_version: String,
    media: MediaService,
    definitions: DefinitionsService,
    profile: ProfileService,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder(bearer_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(bearer_token)
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the `/media` resource.
    pub fn media(&self) -> &MediaService {
        &self.media
    }

    /// Returns the `/definitions` resource.
    pub fn definitions(&self) -> &DefinitionsService {
        &self.definitions
    }

    /// Returns the `/profile` resource.
    pub fn profile(&self) -> &ProfileService {
        &self.profile
    }
}

/// Builder for creating a VoiceBase API client.
pub struct ClientBuilder {
    bearer_token: String,
    base_url: String,
    api_version: String,
    connection_timeout: Duration,
    response_timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new client builder with the given OAuth bearer token.
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
        }
    }

    /// Sets a custom base URL for the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the API version segment, e.g. [`API_VERSION_V3`].
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the connection timeout limit.
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Sets the response timeout limit.
    pub fn response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// Fails with [`Error::Config`] when the bearer token is empty; the token
    /// is required before any request can be made.
    pub fn build(self) -> Result<Client> {
        if self.bearer_token.trim().is_empty() {
            return Err(Error::Config("bearerToken must be non-empty".to_string()));
        }

        let http = Arc::new(HttpClient::new(
            &self.bearer_token,
            self.connection_timeout,
            self.response_timeout,
        )?);

        Ok(Client {
            media: MediaService::new(http.clone(), &self.base_url, &self.api_version),
            definitions: DefinitionsService::new(http.clone(), &self.base_url, &self.api_version),
            profile: ProfileService::new(http, &self.base_url, &self.api_version),
            base_url: self.base_url,
            api_version: self.api_version,
        })
    }
}
