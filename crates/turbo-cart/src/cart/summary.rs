//! Cart summary calculations.

use crate::cart::{group_items, CartItem, ItemGroup};
use crate::error::CartError;
use crate::money::{round2, DISCOUNT};
use serde::{Deserialize, Serialize};

/// Aggregated totals for the current cart contents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of every group's price, rounded to cents.
    pub total_price: f64,
    /// Number of items across all groups.
    pub total_quantity: usize,
    /// Whether the flat discount is applied.
    pub discount_applied: bool,
    /// Total after discount. Not clamped: may go negative.
    pub final_price: f64,
}

impl CartSummary {
    /// Amount taken off the total, zero when no discount is applied.
    pub fn discount_amount(&self) -> f64 {
        if self.discount_applied {
            DISCOUNT
        } else {
            0.0
        }
    }
}

/// Compute the summary for a list of items.
///
/// Pure and deterministic. Prices are taken on trust: a group's unit price
/// is its first member's price, and NaN or negative prices flow through to
/// the totals.
pub fn compute_summary(items: &[CartItem], discount_applied: bool) -> CartSummary {
    summarize(&group_items(items), discount_applied)
}

/// Like [`compute_summary`], but fails when items sharing an id disagree on
/// price or when any price is not finite and non-negative.
pub fn compute_summary_strict(
    items: &[CartItem],
    discount_applied: bool,
) -> Result<CartSummary, CartError> {
    for item in items {
        item.validate()?;
    }
    let groups = group_items(items);
    for group in &groups {
        group.check_consistent_price()?;
    }
    Ok(summarize(&groups, discount_applied))
}

/// Fold already-built groups into a summary.
pub fn summarize(groups: &[ItemGroup<'_>], discount_applied: bool) -> CartSummary {
    let total_quantity = groups.iter().map(ItemGroup::quantity).sum();

    // Float addition is order dependent; sum in a fixed order so item order
    // never moves the total across a cent boundary.
    let mut group_prices: Vec<f64> = groups.iter().map(ItemGroup::group_price).collect();
    group_prices.sort_by(f64::total_cmp);
    let raw_total: f64 = group_prices.iter().sum();

    let total_price = round2(raw_total);
    let final_price = if discount_applied {
        total_price - DISCOUNT
    } else {
        total_price
    };

    tracing::debug!(
        groups = groups.len(),
        total_quantity,
        total_price,
        discount_applied,
        "computed cart summary"
    );

    CartSummary {
        total_price,
        total_quantity,
        discount_applied,
        final_price,
    }
}
