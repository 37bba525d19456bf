//! # api-notify
//!
//! HTTP convenience client that routes request outcomes into a shared
//! notification store.
//!
//! Wraps `reqwest` GET/POST/PUT/DELETE calls with default-configuration
//! merging. When a call settles, a human-readable notice is pushed into a
//! [`MessageStore`] keyed by the request URL: success notices for
//! responses carrying a `message` field, warning notices for failures
//! that carry a server response. A UI layer reads the store reactively
//! and renders the notices.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use api_notify::{ApiClient, RequestConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut defaults = RequestConfig::new();
//!     defaults.base_url = Some("https://api.example.com".into());
//!
//!     let client = ApiClient::builder()
//!         .default_config(defaults)
//!         .build();
//!
//!     // A settled call leaves a notice in the store, keyed by the URL.
//!     let response = client.post("/items")
//!         .json(&serde_json::json!({"name": "widget"}))
//!         .send()
//!         .await?;
//!     println!("created: {}", response.status);
//!
//!     let store = client.store();
//!     if let Some(notice) = store.success("/items").await {
//!         println!("{:?}", notice.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod transport;

// Re-exports for ergonomic usage
pub use client::{ApiClient, ApiClientBuilder, RequestBuilder};
pub use config::RequestConfig;
pub use error::{Error, Result};
pub use models::notice::{MessagePart, MessageText, Notice, NoticeOptions};
pub use models::response::ApiResponse;
pub use store::MessageStore;
