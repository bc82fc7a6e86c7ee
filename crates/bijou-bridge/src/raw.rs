//! Raw response shapes of the external commerce backend.
//!
//! The backend is loosely typed: ids arrive as strings or numbers, prices as
//! numbers or formatted strings, most fields optional. Everything here is
//! `#[serde(default)]` so partial payloads still decode; `map` turns these
//! into the storefront's internal types.

use serde::Deserialize;
use serde_json::Value;

/// A raw product as returned by the backend.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawProduct {
    pub id: Option<Value>,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub price: Option<Value>,
    pub images: Vec<RawImage>,
    pub quantity: Option<i64>,
    pub is_active: Option<bool>,
    pub stock_status: Option<String>,
    pub categories: Vec<RawCategoryRef>,
    pub tags: Vec<String>,
    pub attributes: Option<Value>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// A raw product image.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawImage {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub position: Option<i64>,
}

/// A category reference embedded in a product payload.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawCategoryRef {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// A raw category as returned by the backend.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawCategory {
    pub id: Option<Value>,
    pub parent_id: Option<Value>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub position: Option<i64>,
    pub count: Option<i64>,
}

/// A raw paginated listing envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawPage<T> {
    #[serde(alias = "items", alias = "products", alias = "results")]
    pub data: Vec<T>,
    pub total: Option<i64>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl<T> Default for RawPage<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: None,
            page: None,
            per_page: None,
        }
    }
}

/// Render a string-or-number id field as a string.
pub fn id_string(raw: &Option<Value>) -> Option<String> {
    match raw {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
