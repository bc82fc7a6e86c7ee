//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A response with a status and body and no headers.
    pub fn with_body(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, HashMap::new(), body.into())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response was a client error (4xx status).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response was a server error (5xx status).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::Http {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert!(Response::with_body(204, "").is_success());
        assert!(Response::with_body(404, "").is_client_error());
        assert!(Response::with_body(503, "").is_server_error());
        assert!(!Response::with_body(301, "").is_success());
    }

    #[test]
    fn test_json_parsing() {
        #[derive(serde::Deserialize)]
        struct Payload {
            name: String,
        }

        let response = Response::with_body(200, r#"{"name": "Bague Argent"}"#);
        let payload: Payload = response.json().unwrap();
        assert_eq!(payload.name, "Bague Argent");

        let bad = Response::with_body(200, "not json");
        assert!(bad.json::<Payload>().is_err());
    }

    #[test]
    fn test_header_lookup_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let response = Response::new(200, headers, Vec::new());

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert!(response.header("etag").is_none());
    }

    #[test]
    fn test_error_for_status() {
        assert!(Response::with_body(200, "ok").error_for_status().is_ok());

        let err = Response::with_body(500, "boom").error_for_status().unwrap_err();
        match err {
            FetchError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
