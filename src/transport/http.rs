//! HTTP dispatch applying per-request configuration.

use reqwest::Method;
use tracing::debug;

use crate::config::{RequestConfig, CONNECT_TIMEOUT, REQUEST_TIMEOUT};
use crate::error::{Error, Result};
use crate::models::response::ApiResponse;

/// Thin wrapper over [`reqwest::Client`] that applies a [`RequestConfig`]
/// to each dispatch and classifies failures.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default timeouts.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Create with a custom reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Dispatch one request with the given effective configuration.
    ///
    /// Non-success statuses come back as [`Error::Api`] carrying the
    /// server's `message` field when the body has one, otherwise the raw
    /// body text or the status's canonical reason.
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
        config: &RequestConfig,
    ) -> Result<ApiResponse> {
        let resolved = resolve_url(url, config)?;
        debug!(%method, url = resolved.as_str(), "dispatching");

        let mut request = self.client.request(method, &resolved);

        if let Some(headers) = &config.headers {
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }
        if let Some(query) = &config.query {
            request = request.query(query);
        }
        if let Some(token) = &config.bearer_token {
            request = request.bearer_auth(token);
        }
        if let Some(timeout) = config.timeout {
            request = request.timeout(timeout);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout
            } else {
                Error::Network(e)
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await.map_err(Error::Network)?;
        let body = parse_body(&text);

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .or_else(|| {
                    let trimmed = text.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish()
    }
}

/// Join a relative path onto the configured base URL. Absolute URLs are
/// passed through untouched.
fn resolve_url(url: &str, config: &RequestConfig) -> Result<String> {
    if url.is_empty() {
        return Err(Error::Config("request URL must not be empty".into()));
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(url.to_string());
    }
    match config.base_url.as_deref() {
        Some(base) => Ok(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            url.trim_start_matches('/')
        )),
        None => Ok(url.to_string()),
    }
}

/// Parse a response body: JSON when possible, raw text otherwise, null
/// when empty.
fn parse_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}
