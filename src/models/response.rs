//! Response surface returned to callers.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Response from a completed API call.
///
/// The body is kept as parsed JSON; non-JSON bodies are preserved as a
/// JSON string value, empty bodies as null.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Parsed response body.
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Human-readable message carried in the body, if any.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(|v| v.as_str())
    }

    /// Deserialize the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| Error::Conversion(format!("failed to decode response body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_message_extraction() {
        let response = ApiResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: json!({"message": "OK", "data": [1, 2]}),
        };
        assert_eq!(response.message(), Some("OK"));
    }

    #[test]
    fn test_message_absent_or_not_a_string() {
        let no_field = ApiResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: json!({"data": []}),
        };
        assert_eq!(no_field.message(), None);

        let wrong_type = ApiResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: json!({"message": 42}),
        };
        assert_eq!(wrong_type.message(), None);
    }

    #[test]
    fn test_typed_decode() {
        #[derive(Deserialize)]
        struct Payload {
            count: u32,
        }

        let response = ApiResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: json!({"count": 3}),
        };
        let payload: Payload = response.json().unwrap();
        assert_eq!(payload.count, 3);

        let err = response.json::<Vec<String>>().unwrap_err();
        assert!(matches!(err, Error::Conversion(_)));
    }
}
