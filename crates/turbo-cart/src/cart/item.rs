//! Cart item type.

use crate::error::CartError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One unit of a product in the cart.
///
/// A cart holding three of the same product holds three `CartItem`s with
/// the same `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product identifier.
    pub id: ProductId,
    /// Unit price.
    pub price: f64,
    /// Product name (denormalized for display).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CartItem {
    /// Create a new cart item.
    pub fn new(id: impl Into<ProductId>, price: f64) -> Self {
        Self {
            id: id.into(),
            price,
            title: None,
        }
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Name shown for this item: the title, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(self.id.as_str())
    }

    /// Check that the price is finite and non-negative.
    pub fn validate(&self) -> Result<(), CartError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CartError::InvalidPrice {
                id: self.id.to_string(),
                price: self.price,
            });
        }
        Ok(())
    }
}

/// Parse a JSON array of cart items.
pub fn items_from_json(json: &str) -> Result<Vec<CartItem>, CartError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = CartItem::new("sku-1", 9.5);
        assert_eq!(item.id.as_str(), "sku-1");
        assert_eq!(item.price, 9.5);
        assert!(item.title.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let item = CartItem::new("sku-1", 1.0);
        assert_eq!(item.display_name(), "sku-1");

        let item = item.with_title("Rust Mug");
        assert_eq!(item.display_name(), "Rust Mug");
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        assert!(CartItem::new("a", 0.0).validate().is_ok());
        assert!(CartItem::new("a", -1.0).validate().is_err());
        assert!(CartItem::new("a", f64::NAN).validate().is_err());
        assert!(CartItem::new("a", f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_items_from_json() {
        let items = items_from_json(
            r#"[{"id": 1, "price": 9.995}, {"id": "mug", "price": 5, "title": "Mug"}]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.as_str(), "1");
        assert_eq!(items[1].title.as_deref(), Some("Mug"));
        assert_eq!(items[1].price, 5.0);
    }

    #[test]
    fn test_items_from_json_rejects_missing_price() {
        assert!(items_from_json(r#"[{"id": 1}]"#).is_err());
    }
}
