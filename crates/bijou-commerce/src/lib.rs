//! Domain types and checkout state for the Bijou storefront.
//!
//! This crate holds the storefront's internal model of the commerce world,
//! independent of any particular backend:
//!
//! - **Catalog**: products and categories as the storefront renders them
//! - **Cart / Orders**: the cart snapshot and order/quote records shown in
//!   account pages
//! - **Checkout**: the multi-step checkout state container with field-level
//!   validation
//! - **Search**: query and pagination types for catalog listings
//!
//! Backends populate these types through the adapters in `bijou-bridge`;
//! nothing in here performs I/O.

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod search;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    pub use crate::catalog::{Category, Product};

    pub use crate::cart::{Cart, CartItem};
    pub use crate::orders::{Order, OrderStatus, Quote, QuoteStatus};

    pub use crate::checkout::{
        Address, CheckoutStage, CheckoutState, DeliveryMode, PaymentData, PaymentMethod,
        PickupPoint, ShippingData,
    };

    pub use crate::search::{Pagination, SearchQuery, SearchResults, SortOption};
}
