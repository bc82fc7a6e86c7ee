//! Product type as the storefront renders it.

use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// A product in the storefront catalog.
///
/// This is the app-internal shape: backends are mapped onto it by the bridge
/// adapters, so fields here are already normalized (numeric price, derived
/// slug, resolved availability).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit.
    pub sku: String,
    /// Product name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Full description (may contain HTML/markdown).
    pub description: Option<String>,
    /// Short description for listings.
    pub short_description: Option<String>,
    /// Unit price in major currency units (e.g. euros).
    pub price: f64,
    /// Image URLs, primary first.
    pub images: Vec<String>,
    /// Known stock quantity.
    pub quantity: i64,
    /// Whether the product can currently be purchased.
    pub available: bool,
    /// Categories this product belongs to.
    pub category_ids: Vec<CategoryId>,
    /// Tags for filtering/search.
    pub tags: Vec<String>,
    /// Additional backend metadata as JSON.
    pub metadata: serde_json::Value,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new available product with empty optional fields.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::new(""),
            sku: sku.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            short_description: None,
            price: 0.0,
            images: Vec::new(),
            quantity: 0,
            available: true,
            category_ids: Vec::new(),
            tags: Vec::new(),
            metadata: serde_json::Value::Object(serde_json::Map::new()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Primary image URL, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Add a category to this product.
    pub fn add_category(&mut self, category_id: CategoryId) {
        if !self.category_ids.contains(&category_id) {
            self.category_ids.push(category_id);
        }
    }

    /// Add a tag to this product.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
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

    #[test]
    fn test_product_creation() {
        let product = Product::new("BR-OR-18K", "Bracelet Or 18K", "bracelet-or-18k");
        assert_eq!(product.sku, "BR-OR-18K");
        assert_eq!(product.name, "Bracelet Or 18K");
        assert!(product.is_available());
    }

    #[test]
    fn test_add_category_dedupes() {
        let mut product = Product::new("SKU-1", "Test", "test");
        product.add_category(CategoryId::new("bracelets"));
        product.add_category(CategoryId::new("bracelets"));
        assert_eq!(product.category_ids.len(), 1);
    }

    #[test]
    fn test_primary_image() {
        let mut product = Product::new("SKU-1", "Test", "test");
        assert!(product.primary_image().is_none());

        product.images.push("https://cdn.example.com/a.jpg".to_string());
        product.images.push("https://cdn.example.com/b.jpg".to_string());
        assert_eq!(product.primary_image(), Some("https://cdn.example.com/a.jpg"));
    }
}
