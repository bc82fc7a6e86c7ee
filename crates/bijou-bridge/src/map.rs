//! Pure mapping from raw backend shapes to domain types.
//!
//! Stateless and recomputed per request; no identity is kept between calls.

use crate::normalize::{derive_availability, parse_price, slug_for, slugify};
use crate::raw::{id_string, RawCategory, RawProduct};
use bijou_commerce::ids::{CategoryId, ProductId};
use bijou_commerce::prelude::{Category, Product};

/// Map a raw backend product onto the storefront product shape.
pub fn map_product(raw: &RawProduct) -> Product {
    let sku = raw
        .sku
        .clone()
        .or_else(|| id_string(&raw.id))
        .unwrap_or_default();
    let name = raw.name.clone().unwrap_or_default();

    let slug = match raw.slug.as_deref() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => slug_for(raw.name.as_deref(), &sku),
    };

    let available = derive_availability(raw.is_active, raw.stock_status.as_deref(), raw.quantity);

    Product {
        id: ProductId::new(id_string(&raw.id).unwrap_or_else(|| sku.clone())),
        sku,
        name,
        slug,
        description: raw.description.clone(),
        short_description: raw.short_description.clone(),
        price: raw.price.as_ref().map(parse_price).unwrap_or(0.0),
        images: raw.images.iter().filter_map(|i| i.src.clone()).collect(),
        quantity: raw.quantity.unwrap_or(0),
        available,
        category_ids: raw
            .categories
            .iter()
            .filter_map(|c| id_string(&c.id).map(CategoryId::new))
            .collect(),
        tags: raw.tags.clone(),
        metadata: raw
            .attributes
            .clone()
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new())),
        created_at: raw.created_at.unwrap_or(0),
        updated_at: raw.updated_at.unwrap_or(0),
    }
}

/// Map a raw backend category onto the storefront category shape.
pub fn map_category(raw: &RawCategory) -> Category {
    let id = id_string(&raw.id).unwrap_or_default();
    let name = raw.name.clone().unwrap_or_default();
    let slug = match raw.slug.as_deref() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => slugify(&name),
    };

    Category {
        id: CategoryId::new(id),
        parent_id: id_string(&raw.parent_id).map(CategoryId::new),
        name,
        slug,
        description: raw.description.clone(),
        image_url: raw.image.clone(),
        position: raw.position.unwrap_or(0) as i32,
        product_count: raw.count.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_product(value: serde_json::Value) -> RawProduct {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_map_product_normalizes_everything() {
        let raw = raw_product(json!({
            "id": 42,
            "sku": "BR-18K-01",
            "name": "Bracelet Or 18K",
            "price": "1 234,56 €",
            "quantity": 5,
            "images": [{"src": "https://cdn.example.com/br.jpg"}],
            "categories": [{"id": 7, "name": "Bracelets"}]
        }));

        let product = map_product(&raw);
        assert_eq!(product.id.as_str(), "42");
        assert_eq!(product.sku, "BR-18K-01");
        assert_eq!(product.slug, "bracelet-or-18k");
        assert!((product.price - 1234.56).abs() < 1e-9);
        assert!(product.available);
        assert_eq!(product.images, vec!["https://cdn.example.com/br.jpg"]);
        assert_eq!(product.category_ids, vec![CategoryId::new("7")]);
    }

    #[test]
    fn test_map_product_slug_falls_back_to_sku() {
        let raw = raw_product(json!({"sku": "BR-18K-01"}));
        let product = map_product(&raw);
        assert_eq!(product.slug, "br-18k-01");
        assert_eq!(product.id.as_str(), "BR-18K-01");
    }

    #[test]
    fn test_map_product_provided_slug_wins() {
        let raw = raw_product(json!({
            "name": "Bracelet Or 18K",
            "slug": "bracelet-personnalise"
        }));
        assert_eq!(map_product(&raw).slug, "bracelet-personnalise");
    }

    #[test]
    fn test_map_product_unavailable_when_quantity_zero() {
        let raw = raw_product(json!({"sku": "X", "quantity": 0}));
        assert!(!map_product(&raw).available);

        let raw = raw_product(json!({"sku": "X", "quantity": 5}));
        assert!(map_product(&raw).available);
    }

    #[test]
    fn test_map_product_unparsable_price_is_zero() {
        let raw = raw_product(json!({"sku": "X", "price": "sur devis"}));
        assert_eq!(map_product(&raw).price, 0.0);
    }

    #[test]
    fn test_map_category() {
        let raw: RawCategory = serde_json::from_value(json!({
            "id": "cat-colliers",
            "name": "Colliers Émeraude",
            "parent_id": 3,
            "count": 12
        }))
        .unwrap();

        let category = map_category(&raw);
        assert_eq!(category.id.as_str(), "cat-colliers");
        assert_eq!(category.slug, "colliers-emeraude");
        assert_eq!(category.parent_id, Some(CategoryId::new("3")));
        assert_eq!(category.product_count, 12);
    }
}
