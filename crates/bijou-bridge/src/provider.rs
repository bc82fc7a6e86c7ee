//! Capability-typed provider traits.
//!
//! The backend surface is split into per-capability traits instead of one
//! interface with runtime "not implemented" throws: an adapter implements
//! exactly the capabilities it supports, and the gap shows up at compile
//! time. [`crate::services::CommerceServices`] covers the dynamic path for
//! callers wired at runtime.

use crate::error::BridgeError;
use async_trait::async_trait;
use bijou_commerce::ids::{CategoryId, CompanyId, OrderId, ProductId, QuoteId, SessionId};
use bijou_commerce::prelude::{
    Address, Cart, Category, Order, Product, Quote, SearchQuery, SearchResults,
};

/// Product and category reads. Every adapter supports this.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// List products for a catalog page.
    async fn list_products(&self, query: &SearchQuery) -> Result<SearchResults<Product>, BridgeError>;

    /// Fetch one product by id.
    async fn get_product(&self, id: &ProductId) -> Result<Product, BridgeError>;

    /// Fetch one product by slug.
    async fn get_product_by_slug(&self, slug: &str) -> Result<Product, BridgeError>;

    /// Fetch several products in one go. Missing ids are skipped.
    async fn get_products_batch(&self, ids: &[ProductId]) -> Result<Vec<Product>, BridgeError>;

    /// Full-text search against the search index.
    async fn search_products(&self, query: &SearchQuery) -> Result<SearchResults<Product>, BridgeError>;

    /// List all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, BridgeError>;

    /// Fetch one category by id.
    async fn get_category(&self, id: &CategoryId) -> Result<Category, BridgeError>;
}

/// Cart reads and writes, keyed by browser session.
#[async_trait]
pub trait CartProvider: Send + Sync {
    /// Fetch the session's cart.
    async fn get_cart(&self, session: &SessionId) -> Result<Cart, BridgeError>;

    /// Add a product to the session's cart.
    async fn add_item(
        &self,
        session: &SessionId,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<Cart, BridgeError>;

    /// Remove a product from the session's cart.
    async fn remove_item(&self, session: &SessionId, product_id: &ProductId)
        -> Result<Cart, BridgeError>;
}

/// Order history and actions for the account area.
#[async_trait]
pub trait OrderProvider: Send + Sync {
    /// List orders, optionally scoped to a company.
    async fn list_orders(&self, company: Option<&CompanyId>) -> Result<Vec<Order>, BridgeError>;

    /// Fetch one order.
    async fn get_order(&self, id: &OrderId) -> Result<Order, BridgeError>;

    /// Cancel an order that is still cancellable.
    async fn cancel_order(&self, id: &OrderId) -> Result<Order, BridgeError>;
}

/// Customer profile and saved addresses.
#[async_trait]
pub trait CustomerProvider: Send + Sync {
    /// List the customer's saved addresses.
    async fn list_addresses(&self, session: &SessionId) -> Result<Vec<Address>, BridgeError>;
}

/// B2B company workflows: quotes, approvals, spending.
#[async_trait]
pub trait CompanyProvider: Send + Sync {
    /// List the company's quotes.
    async fn list_quotes(&self, company: &CompanyId) -> Result<Vec<Quote>, BridgeError>;

    /// Accept a submitted quote.
    async fn accept_quote(&self, id: &QuoteId) -> Result<Quote, BridgeError>;

    /// Reject a submitted quote.
    async fn reject_quote(&self, id: &QuoteId) -> Result<Quote, BridgeError>;
}
