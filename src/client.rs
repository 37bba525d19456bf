//! Main client entry point.

use std::sync::Arc;

use reqwest::Method;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::config::{RequestConfig, ERROR_ICON, NOTICE_PREFIX, NOTICE_SUFFIX, SUCCESS_ICON};
use crate::error::{Error, Result};
use crate::models::notice::NoticeOptions;
use crate::models::response::ApiResponse;
use crate::store::MessageStore;
use crate::transport::http::HttpTransport;

/// HTTP convenience client.
///
/// Wraps GET/POST/PUT/DELETE calls with default-configuration merging and
/// routes success/error text into a shared [`MessageStore`] keyed by the
/// request URL.
///
/// # Examples
///
/// ```rust,no_run
/// use api_notify::{ApiClient, RequestConfig};
///
/// # async fn example() -> api_notify::Result<()> {
/// let mut defaults = RequestConfig::new();
/// defaults.base_url = Some("https://api.example.com".into());
///
/// let client = ApiClient::builder()
///     .default_config(defaults)
///     .build();
///
/// let response = client.get("/profile").send().await?;
/// println!("{}", response.message().unwrap_or("no message"));
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    http: HttpTransport,
    store: Arc<MessageStore>,
    default_config: RwLock<RequestConfig>,
    report_success: bool,
}

impl ApiClient {
    /// Create a builder for configuring the client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// The notification store this client reports into.
    pub fn store(&self) -> Arc<MessageStore> {
        Arc::clone(&self.store)
    }

    /// Snapshot of the current default configuration.
    pub async fn default_config(&self) -> RequestConfig {
        self.default_config.read().await.clone()
    }

    /// Shallow-merge `config` into the stored default configuration.
    pub async fn update_default_config(&self, config: RequestConfig) {
        self.default_config.write().await.apply(&config);
    }

    /// Replace the stored default configuration wholesale.
    pub async fn renew_default_config(&self, config: RequestConfig) {
        *self.default_config.write().await = config;
    }

    /// Start building a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::GET, url.into())
    }

    /// Start building a POST request.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::POST, url.into())
    }

    /// Start building a PUT request.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::PUT, url.into())
    }

    /// Start building a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::DELETE, url.into())
    }

    /// Push the outcome of a settled call into the store, keyed by the
    /// caller-supplied URL.
    ///
    /// Failures without a server response are logged but never recorded:
    /// there is no server message to show.
    async fn report(&self, id: &str, outcome: &Result<ApiResponse>) {
        match outcome {
            Ok(response) => {
                if !self.report_success {
                    return;
                }
                let Some(message) = response.message() else {
                    return;
                };
                self.store
                    .toggle_success(id, outcome_notice(message, SUCCESS_ICON))
                    .await;
            }
            Err(Error::Api { status, message }) => {
                warn!(id, status, "request failed: {message}");
                self.store
                    .toggle_warning(id, outcome_notice(message, ERROR_ICON))
                    .await;
            }
            Err(error) => {
                warn!(id, "request failed without a server response: {error}");
            }
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("report_success", &self.report_success)
            .finish()
    }
}

fn outcome_notice(message: &str, icon: &str) -> NoticeOptions {
    NoticeOptions::new()
        .close(true)
        .icon(icon)
        .text(message)
        .decorate(NOTICE_PREFIX, NOTICE_SUFFIX)
}

/// Builder for one API call.
///
/// Created by the verb methods on [`ApiClient`]. The per-call
/// configuration, if any, is shallow-merged over the client's default
/// configuration at send time and never persisted.
pub struct RequestBuilder<'a> {
    client: &'a ApiClient,
    method: Method,
    url: String,
    body: Option<serde_json::Result<serde_json::Value>>,
    config: Option<RequestConfig>,
    show_message: bool,
}

impl<'a> RequestBuilder<'a> {
    fn new(client: &'a ApiClient, method: Method, url: String) -> Self {
        Self {
            client,
            method,
            url,
            body: None,
            config: None,
            show_message: true,
        }
    }

    /// Attach a JSON request body.
    pub fn json<T: serde::Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = Some(serde_json::to_value(body));
        self
    }

    /// Supply a per-call configuration, shallow-merged over the client's
    /// default configuration.
    pub fn config(mut self, config: RequestConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Control whether the outcome is pushed into the notification store.
    /// Defaults to `true`.
    pub fn show_message(mut self, show: bool) -> Self {
        self.show_message = show;
        self
    }

    /// Skip the notification store for this call.
    pub fn silent(self) -> Self {
        self.show_message(false)
    }

    /// Dispatch the request.
    ///
    /// On success, when the body carries a string `message` field and the
    /// client reports successes, a success notice is recorded under the
    /// request URL. On failure with a server response a warning notice is
    /// recorded; failures without one leave the store untouched. Either
    /// way the outcome is returned to the caller.
    pub async fn send(self) -> Result<ApiResponse> {
        let body = match self.body {
            None => None,
            Some(Ok(value)) => Some(value),
            Some(Err(e)) => {
                return Err(Error::Conversion(format!(
                    "failed to serialize request body: {e}"
                )))
            }
        };

        let effective = {
            let defaults = self.client.default_config.read().await;
            match &self.config {
                Some(overlay) => defaults.merged_with(overlay),
                None => defaults.clone(),
            }
        };

        debug!(method = %self.method, url = self.url.as_str(), "sending request");
        let outcome = self
            .client
            .http
            .execute(self.method, &self.url, body.as_ref(), &effective)
            .await;

        if self.show_message {
            self.client.report(&self.url, &outcome).await;
        }

        outcome
    }
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    reqwest_client: Option<reqwest::Client>,
    default_config: Option<RequestConfig>,
    store: Option<Arc<MessageStore>>,
    report_success: bool,
}

impl ApiClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reqwest_client: None,
            default_config: None,
            store: None,
            report_success: true,
        }
    }

    /// Set a custom reqwest client.
    pub fn reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.reqwest_client = Some(client);
        self
    }

    /// Set the initial default configuration.
    pub fn default_config(mut self, config: RequestConfig) -> Self {
        self.default_config = Some(config);
        self
    }

    /// Share an existing notification store instead of creating one.
    pub fn store(mut self, store: Arc<MessageStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Whether success messages are reported to the store in addition to
    /// warnings. Defaults to `true`; set `false` for a warnings-only
    /// client.
    pub fn report_success(mut self, report: bool) -> Self {
        self.report_success = report;
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiClient {
        let http = match self.reqwest_client {
            Some(client) => HttpTransport::with_client(client),
            None => HttpTransport::new(),
        };
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MessageStore::new()));

        info!("ApiClient initialized");
        ApiClient {
            http,
            store,
            default_config: RwLock::new(self.default_config.unwrap_or_default()),
            report_success: self.report_success,
        }
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
