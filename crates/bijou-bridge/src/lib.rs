//! Backend adapters for the Bijou storefront.
//!
//! Translates an external commerce backend's raw product/category/inventory
//! JSON into the storefront's internal types and exposes the backend surface
//! as capability-typed provider traits:
//!
//! - `raw` / `map` / `normalize`: the pure mapping layer (price coercion,
//!   slug derivation, availability rules)
//! - `provider`: one trait per capability, so an adapter only claims what it
//!   actually supports
//! - `rest`: the pass-through HTTP catalog adapter
//! - `services`: the runtime registry that fails loud when an unwired
//!   capability is requested

pub mod error;
pub mod map;
pub mod normalize;
pub mod provider;
pub mod raw;
pub mod rest;
pub mod services;

pub use error::BridgeError;
pub use provider::{
    CartProvider, CatalogProvider, CompanyProvider, CustomerProvider, OrderProvider,
};
pub use rest::{RestBridge, RestBridgeConfig};
pub use services::CommerceServices;
