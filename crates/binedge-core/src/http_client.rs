use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

use crate::Credential;

/// Header carrying the API key.
pub const AUTH_HEADER: &str = "x-key";

/// Header identifying the client.
pub const USER_AGENT_HEADER: &str = "user-agent";

/// GET request handed to the transport.
///
/// Header names are stored lowercased, so each header appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub timeout_ms: u64,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            timeout_ms: 30_000,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_credential(self, credential: &Credential) -> Self {
        self.with_header(AUTH_HEADER, credential.expose())
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Raw response returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok_json(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

/// Transport-level failure: no HTTP status was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Blocking transport contract.
///
/// Implementations must be safe to share across threads; the engine holds one
/// behind an `Arc` for its whole lifetime.
pub trait HttpClient: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Production transport backed by a pooled blocking reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::blocking::Client>,
}

impl ReqwestHttpClient {
    /// Build a client; `verify_tls = false` accepts invalid certificates.
    pub fn new(verify_tls: bool) -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(!verify_tls)
            .build()
            .map_err(|e| HttpError::new(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client))
    }

    /// Wrap a custom reqwest client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self
            .client
            .get(&request.url)
            .timeout(Duration::from_millis(request.timeout_ms));

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().map_err(|e| {
            if e.is_timeout() {
                HttpError::new(format!("request timeout: {e}"))
            } else if e.is_connect() {
                HttpError::new(format!("connection failed: {e}"))
            } else {
                HttpError::new(format!("request failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| HttpError::new(format!("failed to read response body: {e}")))?;

        Ok(HttpResponse { status, body })
    }
}
