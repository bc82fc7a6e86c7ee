//! HTTP client utilities for the Bijou storefront adapters.
//!
//! A small, transport-agnostic fetch layer: requests are built with
//! [`RequestBuilder`], sent through whatever [`HttpTransport`] the runtime
//! provides, and parsed from [`Response`] with automatic JSON handling.
//!
//! # Example
//!
//! ```rust,ignore
//! use bijou_data::{FetchClient, StaticTransport};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Product {
//!     name: String,
//! }
//!
//! let client = FetchClient::new(transport)
//!     .with_base_url("https://api.example.com")
//!     .with_default_header("X-Api-Key", "secret");
//!
//! let product: Product = client
//!     .send(client.get("/products/123").build())
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;
mod transport;

pub use error::FetchError;
pub use request::{encode_query, Method, Request, RequestBuilder};
pub use response::Response;
pub use transport::{HttpTransport, StaticTransport};

/// HTTP client for making outbound requests.
///
/// Wraps a transport with a base URL and default headers so adapters only
/// deal in paths.
pub struct FetchClient<T: HttpTransport> {
    transport: T,
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
}

impl<T: HttpTransport> FetchClient<T> {
    /// Create a new client over a transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: Vec::new(),
        }
    }

    /// Set a base URL prepended to relative request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request builder.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a PATCH request builder.
    pub fn patch(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Patch, url)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request builder with the base URL and default headers applied.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder
    }

    /// Send a built request through the transport.
    pub async fn send(&self, request: Request) -> Result<Response, FetchError> {
        self.transport.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_base_url_joining() {
        let transport = StaticTransport::new().route_json(
            "https://api.example.com/products",
            200,
            "[]",
        );
        let client = FetchClient::new(transport).with_base_url("https://api.example.com/");

        let request = client.get("/products").build();
        assert_eq!(request.url, "https://api.example.com/products");

        let response = client.send(request).await.unwrap();
        assert!(response.is_success());
    }

    #[test]
    fn test_absolute_url_bypasses_base() {
        let client = FetchClient::new(StaticTransport::new())
            .with_base_url("https://api.example.com");
        let request = client.get("https://other.example.com/x").build();
        assert_eq!(request.url, "https://other.example.com/x");
    }

    #[test]
    fn test_default_headers_applied() {
        let client = FetchClient::new(StaticTransport::new())
            .with_default_header("X-Api-Key", "secret");
        let request = client.get("/a").build();
        assert_eq!(
            request.headers,
            vec![("X-Api-Key".to_string(), "secret".to_string())]
        );
    }

    #[test]
    fn test_method_builders() {
        let client = FetchClient::new(StaticTransport::new());
        assert_eq!(client.get("/a").build().method, Method::Get);
        assert_eq!(client.post("/a").build().method, Method::Post);
        assert_eq!(client.put("/a").build().method, Method::Put);
        assert_eq!(client.patch("/a").build().method, Method::Patch);
        assert_eq!(client.delete("/a").build().method, Method::Delete);
    }
}
