//! Batteries-included entry point for the Bijou storefront crates.
//!
//! Re-exports the public surface of the workspace so applications depend on
//! one crate:
//!
//! ```rust,ignore
//! use bijou_sdk::prelude::*;
//!
//! let features = FeatureLoader::default().load_from_env().await?;
//! if features.config.is_enabled("catalog") {
//!     let bridge = RestBridge::new(transport, RestBridgeConfig::new(api_url));
//!     let services = CommerceServices::new("rest-catalog", Arc::new(bridge));
//!     let page = services.catalog().list_products(&SearchQuery::new()).await?;
//! }
//! ```

pub use bijou_bridge as bridge;
pub use bijou_commerce as commerce;
pub use bijou_config as config;
pub use bijou_data as data;
pub use bijou_seo as seo;

/// Prelude for convenient imports.
pub mod prelude {
    pub use bijou_commerce::prelude::*;

    pub use bijou_config::{
        FeatureLoader, FeatureModule, FeatureSource, FeaturesConfig, LoadedFeatures,
        OverrideSource,
    };

    pub use bijou_data::{FetchClient, FetchError, HttpTransport, Request, RequestBuilder, Response};

    pub use bijou_bridge::{
        BridgeError, CartProvider, CatalogProvider, CommerceServices, CompanyProvider,
        CustomerProvider, OrderProvider, RestBridge, RestBridgeConfig,
    };

    pub use bijou_seo::{RobotsConfig, Sitemap, SiteInfo, UrlEntry};
}
