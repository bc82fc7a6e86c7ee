//! Pluggable request transports.

use crate::{FetchError, Request, Response};
use async_trait::async_trait;
use std::collections::HashMap;

/// Sends built requests over the wire.
///
/// The runtime owns the actual socket work; adapters stay transport-agnostic
/// and tests run against [`StaticTransport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the response.
    async fn send(&self, request: Request) -> Result<Response, FetchError>;
}

/// An in-memory transport serving canned responses by exact URL.
///
/// Unrouted URLs get a 404. Also doubles as the mock-data backend when a
/// deployment runs with mock data enabled.
#[derive(Default)]
pub struct StaticTransport {
    routes: HashMap<String, Response>,
}

impl StaticTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response for a URL.
    pub fn route(mut self, url: impl Into<String>, response: Response) -> Self {
        self.routes.insert(url.into(), response);
        self
    }

    /// Register a canned JSON response for a URL.
    pub fn route_json(self, url: impl Into<String>, status: u16, body: &str) -> Self {
        self.route(url, Response::with_body(status, body))
    }
}

#[async_trait]
impl HttpTransport for StaticTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        Ok(self
            .routes
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Response::with_body(404, "not found")))
    }
}
