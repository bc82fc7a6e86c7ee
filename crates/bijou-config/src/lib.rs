//! Feature-flag configuration for the Bijou storefront.
//!
//! A deployment starts from the complete default tree ([`FeaturesConfig`])
//! and may narrow it with a partial override tree coming from the
//! environment or a remote source. The merged tree is built once per
//! request/session by a [`FeatureLoader`] and never mutated afterward; there
//! are no ambient singletons, callers pass the loaded value around
//! explicitly.

pub mod error;
pub mod features;
pub mod loader;
pub mod merge;

pub use error::ConfigError;
pub use features::{FeatureModule, FeaturesConfig, MODULES};
pub use loader::{
    FeatureLoader, FeatureSource, LoadedFeatures, OverrideSource, FEATURE_VAR_PREFIX,
    MOCK_DATA_VAR, SOURCE_VAR,
};
pub use merge::deep_merge;
