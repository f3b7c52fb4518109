//! HTTP request execution for the VoiceBase API.

use std::time::Duration;

use reqwest::{
    Client as ReqwestClient, Method,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
    multipart,
};
use serde_json::Value;

use crate::error::{Error, Result};

const USER_AGENT_VALUE: &str = concat!("voicebase-rust/", env!("CARGO_PKG_VERSION"));

/// A fully-assembled description of one HTTP call, built fresh per request and
/// handed to [`HttpClient`] for dispatch.
pub struct RequestSpec {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    form: Option<multipart::Form>,
}

impl RequestSpec {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
            form: None,
        }
    }

    /// Creates a GET request spec.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Creates a POST request spec.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Creates a PUT request spec.
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    /// Creates a DELETE request spec.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Appends a query parameter when a value is present; absent values are
    /// omitted entirely rather than sent as empty strings.
    pub fn query(mut self, key: &str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.query.push((key.to_string(), value.into()));
        }
        self
    }

    /// Sets a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a multipart form body.
    pub fn form(mut self, form: multipart::Form) -> Self {
        self.form = Some(form);
        self
    }

    /// Returns the target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// HTTP client shared by all resource services.
///
/// Performs exactly one transport attempt per call and normalizes the outcome:
/// transport failures and HTTP error statuses become [`Error`]s, and a 2xx
/// response whose body carries a non-empty `errors` field is converted into an
/// API error as well.
#[derive(Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    auth_header: HeaderValue,
}

impl HttpClient {
    /// Creates a new HTTP client with the given bearer token and timeouts.
    pub(crate) fn new(
        bearer_token: &str,
        connection_timeout: Duration,
        response_timeout: Duration,
    ) -> Result<Self> {
        let client = ReqwestClient::builder()
            .connect_timeout(connection_timeout)
            .timeout(response_timeout)
            .build()?;

        let auth_header = HeaderValue::from_str(&format!("Bearer {bearer_token}"))
            .map_err(|_| Error::Config("bearerToken contains invalid characters".to_string()))?;

        Ok(Self {
            client,
            auth_header,
        })
    }

    /// Executes a request and returns the parsed response body.
    pub async fn execute(&self, spec: RequestSpec) -> Result<Value> {
        let (_, body) = self.dispatch(spec).await?;
        Ok(body)
    }

    /// Executes a request and returns the HTTP status alongside the parsed
    /// body. Used by operations whose contract includes the response status,
    /// such as deletes answering 204 with no content.
    pub async fn execute_with_status(&self, spec: RequestSpec) -> Result<(u16, Value)> {
        self.dispatch(spec).await
    }

    async fn dispatch(&self, spec: RequestSpec) -> Result<(u16, Value)> {
        let is_multipart = spec.form.is_some();
        let mut request = self
            .client
            .request(spec.method, spec.url.as_str())
            .headers(self.default_headers(is_multipart));

        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(ref body) = spec.body {
            request = request.json(body);
        }
        if let Some(form) = spec.form {
            request = request.multipart(form);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(e) if status.is_success() => return Err(Error::Json(e)),
                // Error responses are not guaranteed to be JSON; keep the raw
                // text so it can feed the diagnostic message below.
                Err(_) => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
            }
        };

        // An `errors` field marks an operation failure even under a 2xx status.
        if let Some(message) = errors_message(&body) {
            return Err(Error::api(message, status.as_u16()));
        }

        if !status.is_success() {
            let message = match &body {
                Value::Null => status.to_string(),
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            return Err(Error::api(message, status.as_u16()));
        }

        Ok((status.as_u16(), body))
    }

    fn default_headers(&self, is_multipart: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        // reqwest sets the boundary-carrying content type for multipart forms.
        if !is_multipart {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        headers
    }
}

/// Outcome of a delete-style operation: the HTTP status (204 when the service
/// answers with no content) together with whatever body was returned.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DeleteOutcome {
    pub status: u16,
    pub body: Value,
}

/// Extracts a diagnostic message from a response body's `errors` field, if the
/// field is present and non-empty.
fn errors_message(body: &Value) -> Option<String> {
    match body.get("errors")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(a) if a.is_empty() => None,
        Value::Object(m) if m.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Returns true when a JSON value carries no payload worth transmitting.
pub(crate) fn is_empty_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(m) => m.is_empty(),
        _ => false,
    }
}
