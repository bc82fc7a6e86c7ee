//! The feature configuration tree.

use crate::error::ConfigError;
use crate::merge::deep_merge;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The closed enumeration of storefront modules, in config-key form.
pub const MODULES: [&str; 12] = [
    "catalog",
    "cart",
    "checkout",
    "orders",
    "quotes",
    "approvals",
    "company",
    "lists",
    "comparison",
    "dashboard",
    "quickOrder",
    "warehouse",
];

/// One module's configuration: an enabled flag plus named sub-features.
///
/// Sub-feature leaves are kept as raw JSON so overrides can flip or narrow
/// them without this crate enumerating every leaf.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeatureModule {
    /// Whether the module is enabled at all.
    #[serde(default)]
    pub enabled: bool,
    /// Named sub-features and settings.
    #[serde(flatten)]
    pub options: BTreeMap<String, Value>,
}

impl FeatureModule {
    /// An enabled module with no extra options.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            options: BTreeMap::new(),
        }
    }

    /// A disabled module.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Add an option leaf.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Look up an option leaf.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Look up a boolean sub-feature, defaulting to false.
    pub fn flag(&self, key: &str) -> bool {
        self.options
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// The full feature configuration tree.
///
/// The module set is a closed enumeration; unknown keys arriving in an
/// override are carried in `extra` rather than rejected, so forward-deployed
/// flags survive the round trip. Constructed once per request/session and
/// not mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturesConfig {
    pub catalog: FeatureModule,
    pub cart: FeatureModule,
    pub checkout: FeatureModule,
    pub orders: FeatureModule,
    pub quotes: FeatureModule,
    pub approvals: FeatureModule,
    pub company: FeatureModule,
    pub lists: FeatureModule,
    pub comparison: FeatureModule,
    pub dashboard: FeatureModule,
    #[serde(rename = "quickOrder")]
    pub quick_order: FeatureModule,
    pub warehouse: FeatureModule,
    /// Unknown modules accepted from overrides.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for FeaturesConfig {
    /// The complete retail+wholesale default tree.
    ///
    /// Retail modules ship enabled; the wholesale-only surfaces (quotes,
    /// approvals, warehouse) are off until a deployment flips them.
    fn default() -> Self {
        Self {
            catalog: FeatureModule::enabled().with_option("pageSize", 24),
            cart: FeatureModule::enabled(),
            checkout: FeatureModule::enabled().with_option("pickupEnabled", true),
            orders: FeatureModule::enabled(),
            quotes: FeatureModule::disabled(),
            approvals: FeatureModule::disabled(),
            company: FeatureModule::enabled(),
            lists: FeatureModule::enabled(),
            comparison: FeatureModule::enabled(),
            dashboard: FeatureModule::enabled(),
            quick_order: FeatureModule::enabled(),
            warehouse: FeatureModule::disabled(),
            extra: BTreeMap::new(),
        }
    }
}

impl FeaturesConfig {
    /// Look up a module by its config key.
    pub fn module(&self, name: &str) -> Option<&FeatureModule> {
        match name {
            "catalog" => Some(&self.catalog),
            "cart" => Some(&self.cart),
            "checkout" => Some(&self.checkout),
            "orders" => Some(&self.orders),
            "quotes" => Some(&self.quotes),
            "approvals" => Some(&self.approvals),
            "company" => Some(&self.company),
            "lists" => Some(&self.lists),
            "comparison" => Some(&self.comparison),
            "dashboard" => Some(&self.dashboard),
            "quickOrder" => Some(&self.quick_order),
            "warehouse" => Some(&self.warehouse),
            _ => None,
        }
    }

    /// Whether a module is enabled. Unknown names are disabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.module(name).map(|m| m.enabled).unwrap_or(false)
    }

    /// Produce a new tree with a partial override merged on top of this one.
    ///
    /// Container nodes merge key-by-key; leaves present in the override
    /// replace the default; everything else is retained. Unknown keys are
    /// accepted without validation.
    pub fn merged(&self, overrides: &Value) -> Result<FeaturesConfig, ConfigError> {
        let mut tree = serde_json::to_value(self)?;
        deep_merge(&mut tree, overrides);
        Ok(serde_json::from_value(tree)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_cover_all_modules() {
        let config = FeaturesConfig::default();
        for name in MODULES {
            assert!(config.module(name).is_some(), "missing module {name}");
        }
    }

    #[test]
    fn test_merged_flips_leaf_only() {
        let config = FeaturesConfig::default();
        let merged = config
            .merged(&json!({"checkout": {"enabled": false}}))
            .unwrap();

        assert!(!merged.checkout.enabled);
        // Sibling option survives the merge.
        assert_eq!(merged.checkout.option("pickupEnabled"), Some(&json!(true)));
        // Untouched modules keep their defaults.
        assert!(merged.catalog.enabled);
        assert_eq!(merged.catalog.option("pageSize"), Some(&json!(24)));
    }

    #[test]
    fn test_merged_is_idempotent() {
        let config = FeaturesConfig::default();
        let overrides = json!({"quotes": {"enabled": true}, "catalog": {"pageSize": 48}});

        let once = config.merged(&overrides).unwrap();
        let twice = once.merged(&overrides).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_module_carried_in_extra() {
        let config = FeaturesConfig::default();
        let merged = config
            .merged(&json!({"flashSales": {"enabled": true}}))
            .unwrap();

        assert_eq!(merged.extra.get("flashSales"), Some(&json!({"enabled": true})));
    }

    #[test]
    fn test_unknown_option_carried_on_module() {
        let config = FeaturesConfig::default();
        let merged = config
            .merged(&json!({"cart": {"maxQuantity": 500}}))
            .unwrap();

        assert!(merged.cart.enabled);
        assert_eq!(merged.cart.option("maxQuantity"), Some(&json!(500)));
    }

    #[test]
    fn test_is_enabled() {
        let config = FeaturesConfig::default();
        assert!(config.is_enabled("catalog"));
        assert!(!config.is_enabled("warehouse"));
        assert!(!config.is_enabled("doesNotExist"));
    }

    #[test]
    fn test_flag_helper() {
        let config = FeaturesConfig::default();
        assert!(config.checkout.flag("pickupEnabled"));
        assert!(!config.checkout.flag("giftWrap"));
    }
}
