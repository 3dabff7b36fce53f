//! Grouping of duplicate cart items.

use crate::cart::CartItem;
use crate::error::CartError;
use crate::ids::ProductId;
use indexmap::IndexMap;

/// Cart items sharing one product id.
///
/// Borrowed from the item list and rebuilt on every evaluation. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGroup<'a> {
    members: Vec<&'a CartItem>,
}

impl<'a> ItemGroup<'a> {
    /// Product id shared by every member.
    pub fn id(&self) -> &'a ProductId {
        &self.first().id
    }

    /// First member of the group, used as the representative item.
    pub fn first(&self) -> &'a CartItem {
        self.members[0]
    }

    /// All members in their original relative order.
    pub fn members(&self) -> &[&'a CartItem] {
        &self.members
    }

    /// Purchased quantity for this product.
    pub fn quantity(&self) -> usize {
        self.members.len()
    }

    /// Unit price, taken from the first member.
    pub fn unit_price(&self) -> f64 {
        self.first().price
    }

    /// Unit price times quantity.
    pub fn group_price(&self) -> f64 {
        self.unit_price() * self.quantity() as f64
    }

    /// Display name of the representative item.
    pub fn display_name(&self) -> &'a str {
        self.first().display_name()
    }

    /// Check that every member has the representative unit price.
    pub fn check_consistent_price(&self) -> Result<(), CartError> {
        let expected = self.unit_price();
        match self.members.iter().find(|m| m.price != expected) {
            Some(odd) => Err(CartError::InconsistentPrice {
                id: self.id().to_string(),
                expected,
                found: odd.price,
            }),
            None => Ok(()),
        }
    }
}

/// Partition items into groups keyed by product id.
///
/// Groups are ordered by the first appearance of each id; members keep their
/// relative order. Every item lands in exactly one group.
pub fn group_items(items: &[CartItem]) -> Vec<ItemGroup<'_>> {
    let mut groups: IndexMap<&ProductId, Vec<&CartItem>> = IndexMap::new();
    for item in items {
        groups.entry(&item.id).or_default().push(item);
    }
    groups
        .into_values()
        .map(|members| ItemGroup { members })
        .collect()
}
