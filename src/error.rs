//! Error types for the VoiceBase API client.

use thiserror::Error;

/// Result type alias for VoiceBase operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for VoiceBase API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or empty. Raised before any network
    /// call is attempted.
    #[error("invalid argument: {0} must be specified")]
    InvalidArgument(String),

    /// Error reported by the VoiceBase API itself, either through an HTTP
    /// error status or through an `errors` field in an otherwise successful
    /// response body.
    #[error("voicebase api error: {message} (http status {http_status})")]
    Api { message: String, http_status: u16 },

    /// HTTP transport error (connection failure, timeout).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new API error.
    pub fn api(message: impl Into<String>, http_status: u16) -> Self {
        Error::Api {
            message: message.into(),
            http_status,
        }
    }

    /// Returns true if this is an invalid-argument error, i.e. the call was
    /// rejected locally before any request was made.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Returns true if this is an error reported by the API.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns true if this is a transport-level error.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Json(_))
    }

    /// Returns true if the API rejected the request's credentials.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Api { http_status, .. } => *http_status == 401 || *http_status == 403,
            _ => false,
        }
    }
}

/// Checks that an identifier-style argument is non-empty.
pub(crate) fn require_arg(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(name.to_string()));
    }
    Ok(())
}
