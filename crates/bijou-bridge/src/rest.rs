//! REST catalog adapter.
//!
//! Pass-through list/get/search/batch operations over HTTP against a generic
//! REST product backend, mapped onto domain types by `map`. This adapter
//! implements only [`CatalogProvider`]; carts, orders, customers, and the
//! B2B company workflows belong to other providers.

use crate::error::BridgeError;
use crate::map::{map_category, map_product};
use crate::provider::CatalogProvider;
use crate::raw::{RawCategory, RawPage, RawProduct};
use async_trait::async_trait;
use bijou_commerce::ids::{CategoryId, ProductId};
use bijou_commerce::prelude::{Category, Pagination, Product, SearchQuery, SearchResults};
use bijou_data::{encode_query, FetchClient, HttpTransport, Response};
use futures::future::join_all;
use serde::de::DeserializeOwned;

/// Name under which this adapter reports itself in errors and logs.
pub const ADAPTER_NAME: &str = "rest-catalog";

/// Configuration for the REST catalog adapter.
#[derive(Debug, Clone)]
pub struct RestBridgeConfig {
    /// Backend base URL (e.g. `https://api.backend.example`).
    pub base_url: String,
    /// Bearer token, if the backend requires one.
    pub api_key: Option<String>,
}

impl RestBridgeConfig {
    /// Create a config with just a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Set the bearer token.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// REST catalog adapter over an injected transport.
pub struct RestBridge<T: HttpTransport> {
    client: FetchClient<T>,
}

impl<T: HttpTransport> RestBridge<T> {
    /// Create the adapter.
    pub fn new(transport: T, config: RestBridgeConfig) -> Self {
        let mut client = FetchClient::new(transport).with_base_url(config.base_url);
        if let Some(key) = config.api_key {
            client = client.with_default_header("Authorization", format!("Bearer {}", key));
        }
        Self { client }
    }

    fn listing_path(path: &str, query: &SearchQuery) -> String {
        let mut url = format!("{}?page={}&per_page={}", path, query.page, query.per_page);
        if let Some(q) = &query.query {
            url.push_str("&q=");
            url.push_str(&encode_query(q));
        }
        if let Some(category) = &query.category_id {
            url.push_str("&category=");
            url.push_str(&encode_query(category.as_str()));
        }
        url.push_str("&sort=");
        url.push_str(query.sort.as_str());
        url
    }

    async fn fetch_product_page(
        &self,
        path: &str,
        query: &SearchQuery,
    ) -> Result<SearchResults<Product>, BridgeError> {
        let url = Self::listing_path(path, query);
        tracing::debug!(adapter = ADAPTER_NAME, %url, "listing products");

        let response = self.client.send(self.client.get(&url).build()).await?;
        if response.status == 404 {
            // Backend has no such listing; an empty page is the safer default.
            return Ok(SearchResults::empty(query.per_page));
        }
        let page: RawPage<RawProduct> = decode(response)?;

        let total = page.total.unwrap_or(page.data.len() as i64);
        let items = page.data.iter().map(map_product).collect();
        Ok(SearchResults::new(
            items,
            Pagination::new(query.page, query.per_page, total),
        ))
    }
}

#[async_trait]
impl<T: HttpTransport> CatalogProvider for RestBridge<T> {
    async fn list_products(&self, query: &SearchQuery) -> Result<SearchResults<Product>, BridgeError> {
        self.fetch_product_page("/products", query).await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, BridgeError> {
        let url = format!("/products/{}", encode_query(id.as_str()));
        let response = self.client.send(self.client.get(&url).build()).await?;
        if response.status == 404 {
            return Err(BridgeError::not_found("product", id.as_str()));
        }
        let raw: RawProduct = decode(response)?;
        Ok(map_product(&raw))
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Product, BridgeError> {
        let url = format!("/products?slug={}", encode_query(slug));
        let response = self.client.send(self.client.get(&url).build()).await?;
        if response.status == 404 {
            return Err(BridgeError::not_found("product", slug));
        }
        let page: RawPage<RawProduct> = decode(response)?;
        page.data
            .first()
            .map(map_product)
            .ok_or_else(|| BridgeError::not_found("product", slug))
    }

    async fn get_products_batch(&self, ids: &[ProductId]) -> Result<Vec<Product>, BridgeError> {
        let fetches = ids.iter().map(|id| self.get_product(id));
        let mut products = Vec::with_capacity(ids.len());
        for (id, result) in ids.iter().zip(join_all(fetches).await) {
            match result {
                Ok(product) => products.push(product),
                Err(BridgeError::NotFound { .. }) => {
                    tracing::debug!(adapter = ADAPTER_NAME, product = %id, "batch item missing, skipping");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(products)
    }

    async fn search_products(&self, query: &SearchQuery) -> Result<SearchResults<Product>, BridgeError> {
        self.fetch_product_page("/search", query).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, BridgeError> {
        let response = self
            .client
            .send(self.client.get("/categories").build())
            .await?;
        if response.status == 404 {
            tracing::warn!(adapter = ADAPTER_NAME, "backend exposes no categories, listing empty");
            return Ok(Vec::new());
        }
        let page: RawPage<RawCategory> = decode(response)?;
        Ok(page.data.iter().map(map_category).collect())
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Category, BridgeError> {
        let url = format!("/categories/{}", encode_query(id.as_str()));
        let response = self.client.send(self.client.get(&url).build()).await?;
        if response.status == 404 {
            return Err(BridgeError::not_found("category", id.as_str()));
        }
        let raw: RawCategory = decode(response)?;
        Ok(map_category(&raw))
    }
}

/// Decode a successful response body, distinguishing payload-shape failures
/// from transport-level HTTP errors.
fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BridgeError> {
    response
        .error_for_status()?
        .json()
        .map_err(|e| BridgeError::Decode(e.to_string()))
}
