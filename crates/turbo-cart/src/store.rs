//! Cart item storage.
//!
//! The view never owns the item list. It reads a snapshot from a
//! [`CartStore`] and asks the store to clear itself.

use crate::cart::CartItem;
use crate::error::CartError;

/// Source of cart items.
///
/// Implementations serialize their own mutations; `items` returns an owned
/// snapshot so a summary is always computed from a consistent list.
pub trait CartStore {
    /// Snapshot of the items currently in the cart.
    fn items(&self) -> Vec<CartItem>;

    /// Remove every item.
    fn clear(&mut self);

    /// Check if the cart is empty.
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// In-memory cart store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCartStore {
    items: Vec<CartItem>,
}

impl MemoryCartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with items.
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Load items from a JSON array.
    ///
    /// ```
    /// use turbo_cart::store::{CartStore, MemoryCartStore};
    /// let store = MemoryCartStore::from_json(r#"[{"id": 1, "price": 2.5}]"#).unwrap();
    /// assert_eq!(store.items().len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CartError> {
        Ok(Self::with_items(crate::cart::items_from_json(json)?))
    }

    /// Add one unit of a product.
    pub fn add(&mut self, item: CartItem) {
        tracing::debug!(id = %item.id, price = item.price, "adding item to cart");
        self.items.push(item);
    }

    /// Number of item entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl CartStore for MemoryCartStore {
    fn items(&self) -> Vec<CartItem> {
        self.items.clone()
    }

    fn clear(&mut self) {
        tracing::info!(removed = self.items.len(), "clearing cart");
        self.items.clear();
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
