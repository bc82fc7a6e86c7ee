//! Runtime capability registry.

use crate::error::BridgeError;
use crate::provider::{
    CartProvider, CatalogProvider, CompanyProvider, CustomerProvider, OrderProvider,
};
use std::sync::Arc;

/// The set of providers a deployment is wired with.
///
/// The catalog capability is always present; everything else is optional.
/// Asking for an absent capability fails loud with an error naming it and
/// the adapter that lacks it, rather than silently no-opping.
pub struct CommerceServices {
    adapter: String,
    catalog: Arc<dyn CatalogProvider>,
    carts: Option<Arc<dyn CartProvider>>,
    orders: Option<Arc<dyn OrderProvider>>,
    customers: Option<Arc<dyn CustomerProvider>>,
    company: Option<Arc<dyn CompanyProvider>>,
}

impl CommerceServices {
    /// Create a registry with just a catalog provider.
    pub fn new(adapter: impl Into<String>, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            adapter: adapter.into(),
            catalog,
            carts: None,
            orders: None,
            customers: None,
            company: None,
        }
    }

    /// Wire a cart provider.
    pub fn with_carts(mut self, provider: Arc<dyn CartProvider>) -> Self {
        self.carts = Some(provider);
        self
    }

    /// Wire an order provider.
    pub fn with_orders(mut self, provider: Arc<dyn OrderProvider>) -> Self {
        self.orders = Some(provider);
        self
    }

    /// Wire a customer provider.
    pub fn with_customers(mut self, provider: Arc<dyn CustomerProvider>) -> Self {
        self.customers = Some(provider);
        self
    }

    /// Wire a B2B company provider.
    pub fn with_company(mut self, provider: Arc<dyn CompanyProvider>) -> Self {
        self.company = Some(provider);
        self
    }

    /// Name of the adapter this registry was wired for.
    pub fn adapter(&self) -> &str {
        &self.adapter
    }

    /// The catalog capability (always available).
    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.catalog.as_ref()
    }

    /// The cart capability.
    pub fn carts(&self) -> Result<&dyn CartProvider, BridgeError> {
        self.carts
            .as_deref()
            .ok_or_else(|| BridgeError::unsupported("carts", &self.adapter))
    }

    /// The order capability.
    pub fn orders(&self) -> Result<&dyn OrderProvider, BridgeError> {
        self.orders
            .as_deref()
            .ok_or_else(|| BridgeError::unsupported("orders", &self.adapter))
    }

    /// The customer capability.
    pub fn customers(&self) -> Result<&dyn CustomerProvider, BridgeError> {
        self.customers
            .as_deref()
            .ok_or_else(|| BridgeError::unsupported("customers", &self.adapter))
    }

    /// The B2B company capability (quotes, approvals, spending).
    pub fn company(&self) -> Result<&dyn CompanyProvider, BridgeError> {
        self.company
            .as_deref()
            .ok_or_else(|| BridgeError::unsupported("company", &self.adapter))
    }
}
