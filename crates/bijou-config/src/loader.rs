//! Feature configuration loading.
//!
//! Selects an override source (environment, remote, or none), merges it onto
//! the defaults, and reports which source actually won. A failing remote
//! source falls back to the defaults unless the caller disables fallback.

use crate::error::ConfigError;
use crate::features::{FeaturesConfig, MODULES};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Selects which override source to use.
pub const SOURCE_VAR: &str = "NEXT_PUBLIC_FEATURES_SOURCE";
/// Per-module enable flags: `NEXT_PUBLIC_FEATURE_CATALOG`, etc.
pub const FEATURE_VAR_PREFIX: &str = "NEXT_PUBLIC_FEATURE_";
/// Toggles mock data for development deployments.
pub const MOCK_DATA_VAR: &str = "NEXT_PUBLIC_MOCK_DATA";

/// Where feature overrides come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeatureSource {
    /// No overrides; the defaults are used as-is.
    #[default]
    Local,
    /// Overrides read from `NEXT_PUBLIC_FEATURE_*` environment variables.
    Env,
    /// Overrides fetched from a configured remote source.
    Remote,
}

impl FeatureSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureSource::Local => "local",
            FeatureSource::Env => "env",
            FeatureSource::Remote => "remote",
        }
    }

    /// Parse a source selector.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(FeatureSource::Local),
            "env" => Ok(FeatureSource::Env),
            "remote" => Ok(FeatureSource::Remote),
            other => Err(ConfigError::UnknownSource(other.to_string())),
        }
    }

    /// Read the selector from the environment, defaulting to `Local`.
    ///
    /// An unknown selector is logged and treated as `Local` rather than
    /// failing startup.
    pub fn from_env() -> Self {
        match std::env::var(SOURCE_VAR) {
            Ok(raw) => Self::parse(&raw).unwrap_or_else(|_| {
                tracing::warn!(selector = %raw, "unknown features source, using local defaults");
                FeatureSource::Local
            }),
            Err(_) => FeatureSource::Local,
        }
    }
}

/// A remote provider of feature overrides (e.g. a config service).
#[async_trait]
pub trait OverrideSource: Send + Sync {
    /// Fetch the partial override tree, optionally for a named deployment.
    async fn fetch(&self, id: Option<&str>) -> Result<Value, ConfigError>;
}

/// The result of loading feature configuration.
#[derive(Debug, Clone)]
pub struct LoadedFeatures {
    /// The complete merged tree.
    pub config: FeaturesConfig,
    /// Name of the source that actually provided the overrides.
    pub source: String,
    /// Unix timestamp of the load.
    pub loaded_at: i64,
    /// Whether mock data is requested for this deployment.
    pub mock_data: bool,
}

/// Loads feature configuration from a selected source.
///
/// Built once at startup and passed to callers explicitly; nothing here is a
/// process-wide singleton.
pub struct FeatureLoader {
    defaults: FeaturesConfig,
    remote: Option<Arc<dyn OverrideSource>>,
    remote_id: Option<String>,
    fallback_to_default: bool,
}

impl Default for FeatureLoader {
    fn default() -> Self {
        Self::new(FeaturesConfig::default())
    }
}

impl FeatureLoader {
    /// Create a loader over a default tree.
    pub fn new(defaults: FeaturesConfig) -> Self {
        Self {
            defaults,
            remote: None,
            remote_id: None,
            fallback_to_default: true,
        }
    }

    /// Configure the remote override source.
    pub fn with_remote(mut self, source: Arc<dyn OverrideSource>) -> Self {
        self.remote = Some(source);
        self
    }

    /// Identifier passed to the remote source (e.g. a deployment name).
    pub fn with_remote_id(mut self, id: impl Into<String>) -> Self {
        self.remote_id = Some(id.into());
        self
    }

    /// Propagate remote failures instead of falling back to the defaults.
    pub fn without_fallback(mut self) -> Self {
        self.fallback_to_default = false;
        self
    }

    /// Load configuration from the source selected by the environment.
    pub async fn load_from_env(&self) -> Result<LoadedFeatures, ConfigError> {
        self.load(FeatureSource::from_env()).await
    }

    /// Load configuration from an explicit source.
    pub async fn load(&self, source: FeatureSource) -> Result<LoadedFeatures, ConfigError> {
        let (config, resolved) = match source {
            FeatureSource::Local => (self.defaults.clone(), FeatureSource::Local),
            FeatureSource::Env => {
                let overrides = env_overrides();
                (self.defaults.merged(&overrides)?, FeatureSource::Env)
            }
            FeatureSource::Remote => match self.fetch_remote().await {
                Ok(overrides) => (self.defaults.merged(&overrides)?, FeatureSource::Remote),
                Err(e) if self.fallback_to_default => {
                    tracing::warn!(error = %e, "remote features unavailable, using defaults");
                    (self.defaults.clone(), FeatureSource::Local)
                }
                Err(e) => return Err(e),
            },
        };

        Ok(LoadedFeatures {
            config,
            source: resolved.as_str().to_string(),
            loaded_at: current_timestamp(),
            mock_data: mock_data_from_env(),
        })
    }

    async fn fetch_remote(&self) -> Result<Value, ConfigError> {
        let source = self.remote.as_ref().ok_or_else(|| {
            ConfigError::SourceUnavailable("no remote override source configured".to_string())
        })?;
        source.fetch(self.remote_id.as_deref()).await
    }
}

/// Build the override tree from `NEXT_PUBLIC_FEATURE_*` variables.
pub fn env_overrides() -> Value {
    env_overrides_from(|name| std::env::var(name).ok())
}

/// Whether `NEXT_PUBLIC_MOCK_DATA` requests mock data.
pub fn mock_data_from_env() -> bool {
    std::env::var(MOCK_DATA_VAR)
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

// Separated from the environment for testability.
fn env_overrides_from(get: impl Fn(&str) -> Option<String>) -> Value {
    let mut tree = Map::new();
    for module in MODULES {
        let var = format!("{}{}", FEATURE_VAR_PREFIX, module.to_uppercase());
        if let Some(raw) = get(&var) {
            let mut node = Map::new();
            node.insert("enabled".to_string(), Value::Bool(is_truthy(&raw)));
            tree.insert(module.to_string(), Value::Object(node));
        }
    }
    Value::Object(tree)
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1")
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StaticSource(Value);

    #[async_trait]
    impl OverrideSource for StaticSource {
        async fn fetch(&self, _id: Option<&str>) -> Result<Value, ConfigError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl OverrideSource for FailingSource {
        async fn fetch(&self, _id: Option<&str>) -> Result<Value, ConfigError> {
            Err(ConfigError::SourceUnavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(FeatureSource::parse("remote").unwrap(), FeatureSource::Remote);
        assert_eq!(FeatureSource::parse("ENV").unwrap(), FeatureSource::Env);
        assert!(FeatureSource::parse("s3").is_err());
    }

    #[test]
    fn test_env_overrides_shape() {
        let overrides = env_overrides_from(|name| match name {
            "NEXT_PUBLIC_FEATURE_QUOTES" => Some("true".to_string()),
            "NEXT_PUBLIC_FEATURE_COMPARISON" => Some("0".to_string()),
            "NEXT_PUBLIC_FEATURE_QUICKORDER" => Some("1".to_string()),
            _ => None,
        });

        assert_eq!(
            overrides,
            json!({
                "quotes": {"enabled": true},
                "comparison": {"enabled": false},
                "quickOrder": {"enabled": true},
            })
        );
    }

    #[test]
    fn test_env_overrides_absent_vars_untouched() {
        let overrides = env_overrides_from(|_| None);
        assert_eq!(overrides, json!({}));
    }

    #[tokio::test]
    async fn test_load_local() {
        let loader = FeatureLoader::default();
        let loaded = loader.load(FeatureSource::Local).await.unwrap();

        assert_eq!(loaded.source, "local");
        assert_eq!(loaded.config, FeaturesConfig::default());
        assert!(loaded.loaded_at > 0);
    }

    #[tokio::test]
    async fn test_load_remote_merges() {
        let loader = FeatureLoader::default()
            .with_remote(Arc::new(StaticSource(json!({"quotes": {"enabled": true}}))))
            .with_remote_id("wholesale-fr");
        let loaded = loader.load(FeatureSource::Remote).await.unwrap();

        assert_eq!(loaded.source, "remote");
        assert!(loaded.config.quotes.enabled);
        assert!(loaded.config.catalog.enabled);
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back() {
        let loader = FeatureLoader::default().with_remote(Arc::new(FailingSource));
        let loaded = loader.load(FeatureSource::Remote).await.unwrap();

        assert_eq!(loaded.source, "local");
        assert_eq!(loaded.config, FeaturesConfig::default());
    }

    #[tokio::test]
    async fn test_remote_failure_propagates_without_fallback() {
        let loader = FeatureLoader::default()
            .with_remote(Arc::new(FailingSource))
            .without_fallback();

        let err = loader.load(FeatureSource::Remote).await.unwrap_err();
        assert!(matches!(err, ConfigError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_remote_without_source_configured() {
        let loader = FeatureLoader::default().without_fallback();
        assert!(loader.load(FeatureSource::Remote).await.is_err());
    }
}
