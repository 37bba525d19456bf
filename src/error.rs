//! Error types for the api-notify crate.

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by the client and transport layers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid client or request configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never produced a server response (DNS failure,
    /// connection refused, TLS error, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request timed out before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A request body or response body could not be (de)serialized.
    #[error("conversion error: {0}")]
    Conversion(String),
}

impl Error {
    /// Whether the failure carries a server response.
    ///
    /// Only failures with a server response are reported to the
    /// notification store; callers can use this to decide whether a
    /// user-facing message already exists for the request.
    pub fn has_server_response(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_response_discriminator() {
        let api = Error::Api {
            status: 400,
            message: "Bad input".into(),
        };
        assert!(api.has_server_response());
        assert!(!Error::Timeout.has_server_response());
        assert!(!Error::Config("bad".into()).has_server_response());
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 404,
            message: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "API error (status 404): Not Found");
    }
}
