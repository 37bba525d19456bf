//! Request configuration and shared constants.

use std::collections::HashMap;
use std::time::Duration;

/// Connect timeout for HTTP requests.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for requests without a per-call override.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Decoration wrapped around every notice message pushed by the client.
pub const NOTICE_PREFIX: &str = "<p>";
pub const NOTICE_SUFFIX: &str = "</p>";

/// Icon hint stored with success notices.
pub const SUCCESS_ICON: &str = "success";

/// Icon hint stored with warning notices.
pub const ERROR_ICON: &str = "error";

/// Per-request HTTP options.
///
/// A client holds one of these as its default configuration; callers may
/// supply another per call, which is shallow-merged on top of the default.
/// The merge is one level deep: a field set in the overlay replaces the
/// same field wholesale, so overlay `headers` replace default `headers`
/// entirely rather than being combined key by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    /// Base URL joined with relative request paths.
    pub base_url: Option<String>,
    /// Headers sent with the request.
    pub headers: Option<HashMap<String, String>>,
    /// Query parameters appended to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Token rendered as an `Authorization: Bearer ...` header.
    pub bearer_token: Option<String>,
    /// Per-request timeout override.
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow-merge `overlay` into this configuration in place.
    ///
    /// Fields the overlay leaves unset are preserved; last writer wins.
    pub fn apply(&mut self, overlay: &RequestConfig) {
        if overlay.base_url.is_some() {
            self.base_url = overlay.base_url.clone();
        }
        if overlay.headers.is_some() {
            self.headers = overlay.headers.clone();
        }
        if overlay.query.is_some() {
            self.query = overlay.query.clone();
        }
        if overlay.bearer_token.is_some() {
            self.bearer_token = overlay.bearer_token.clone();
        }
        if overlay.timeout.is_some() {
            self.timeout = overlay.timeout;
        }
    }

    /// Return a copy of this configuration with `overlay` shallow-merged
    /// on top.
    pub fn merged_with(&self, overlay: &RequestConfig) -> RequestConfig {
        let mut merged = self.clone();
        merged.apply(overlay);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_overrides_and_preserves() {
        let mut defaults = RequestConfig::new();
        defaults.base_url = Some("https://api.example.com".into());
        defaults.bearer_token = Some("default-token".into());

        let mut overlay = RequestConfig::new();
        overlay.bearer_token = Some("call-token".into());

        let effective = defaults.merged_with(&overlay);
        assert_eq!(effective.bearer_token.as_deref(), Some("call-token"));
        // Fields the overlay leaves unset survive the merge.
        assert_eq!(
            effective.base_url.as_deref(),
            Some("https://api.example.com")
        );
    }

    #[test]
    fn test_merge_replaces_maps_wholesale() {
        let mut defaults = RequestConfig::new();
        defaults.headers = Some(headers(&[("x-a", "1"), ("x-b", "2")]));

        let mut overlay = RequestConfig::new();
        overlay.headers = Some(headers(&[("x-a", "9")]));

        let effective = defaults.merged_with(&overlay);
        // One level only: the overlay map replaces the default map.
        assert_eq!(effective.headers, Some(headers(&[("x-a", "9")])));
    }

    #[test]
    fn test_apply_is_cumulative() {
        let mut config = RequestConfig::new();

        let mut first = RequestConfig::new();
        first.base_url = Some("https://one.example.com".into());
        config.apply(&first);

        let mut second = RequestConfig::new();
        second.bearer_token = Some("token".into());
        config.apply(&second);

        assert_eq!(config.base_url.as_deref(), Some("https://one.example.com"));
        assert_eq!(config.bearer_token.as_deref(), Some("token"));
    }

    #[test]
    fn test_apply_last_writer_wins() {
        let mut config = RequestConfig::new();

        let mut first = RequestConfig::new();
        first.bearer_token = Some("first".into());
        config.apply(&first);

        let mut second = RequestConfig::new();
        second.bearer_token = Some("second".into());
        config.apply(&second);

        assert_eq!(config.bearer_token.as_deref(), Some("second"));
    }

    #[test]
    fn test_empty_overlay_is_noop() {
        let mut defaults = RequestConfig::new();
        defaults.base_url = Some("https://api.example.com".into());
        defaults.timeout = Some(Duration::from_secs(5));

        let effective = defaults.merged_with(&RequestConfig::new());
        assert_eq!(effective, defaults);
    }
}
