//! Cart snapshot types.
//!
//! The cart itself lives in the commerce backend; these types are the shape
//! the storefront renders after a `CartProvider` fetch.

use crate::error::CommerceError;
use crate::ids::{CartId, ProductId};
use serde::{Deserialize, Serialize};

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price in major currency units.
    pub unit_price: f64,
}

impl CartItem {
    /// Create a cart line, rejecting non-positive quantities.
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        quantity: i64,
        unit_price: f64,
    ) -> Result<Self, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        Ok(Self {
            product_id,
            name: name.into(),
            quantity,
            unit_price,
        })
    }

    /// Line subtotal.
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// A shopping cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Line items.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total before shipping.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_totals() {
        let mut cart = Cart::new(CartId::new("cart-1"));
        cart.items.push(
            CartItem::new(ProductId::new("p-1"), "Bague Argent", 2, 49.9).unwrap(),
        );
        cart.items.push(
            CartItem::new(ProductId::new("p-2"), "Collier Perles", 1, 120.0).unwrap(),
        );

        assert_eq!(cart.item_count(), 3);
        assert!((cart.total() - 219.8).abs() < 1e-9);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_item_rejects_non_positive_quantity() {
        for quantity in [0, -2] {
            let err = CartItem::new(ProductId::new("p-1"), "Bague Argent", quantity, 49.9)
                .unwrap_err();
            assert!(matches!(err, CommerceError::InvalidQuantity(q) if q == quantity));
        }
    }
}
