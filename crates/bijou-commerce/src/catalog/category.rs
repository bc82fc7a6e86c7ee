//! Category types for catalog navigation.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Parent category ID (None for root categories).
    pub parent_id: Option<CategoryId>,
    /// Category name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Category description.
    pub description: Option<String>,
    /// Category image URL.
    pub image_url: Option<String>,
    /// Sort order position within parent.
    pub position: i32,
    /// Number of products in this category.
    pub product_count: i64,
}

impl Category {
    /// Create a new root category.
    pub fn new(id: CategoryId, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            parent_id: None,
            name: name.into(),
            slug: slug.into(),
            description: None,
            image_url: None,
            position: 0,
            product_count: 0,
        }
    }

    /// Attach this category to a parent.
    pub fn with_parent(mut self, parent_id: CategoryId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Check if this is a root category.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_category() {
        let cat = Category::new(CategoryId::new("colliers"), "Colliers", "colliers");
        assert!(cat.is_root());
        assert_eq!(cat.name, "Colliers");
    }

    #[test]
    fn test_child_category() {
        let child = Category::new(CategoryId::new("colliers-or"), "Colliers Or", "colliers-or")
            .with_parent(CategoryId::new("colliers"));
        assert!(!child.is_root());
        assert_eq!(child.parent_id, Some(CategoryId::new("colliers")));
    }
}
