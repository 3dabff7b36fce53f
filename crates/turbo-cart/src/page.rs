//! Display model for the cart page.
//!
//! Everything here is plain strings ready for a front end to lay out. The
//! page is rebuilt from a fresh summary on every render.

use crate::cart::{CartSummary, ItemGroup};
use crate::money::{PriceFormat, DISCOUNT};
use serde::Serialize;

/// Notice shown instead of a summary when the cart has no items.
pub const EMPTY_CART_NOTICE: &str = "No items in the Cart";

/// Rendered cart page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CartPage {
    /// The cart has no items.
    Empty { notice: String },
    /// The cart has items.
    Summary(SummaryPage),
}

impl CartPage {
    pub fn empty() -> Self {
        CartPage::Empty {
            notice: EMPTY_CART_NOTICE.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CartPage::Empty { .. })
    }

    /// The summary section, if the cart has items.
    pub fn summary(&self) -> Option<&SummaryPage> {
        match self {
            CartPage::Summary(page) => Some(page),
            CartPage::Empty { .. } => None,
        }
    }
}

/// One row per product group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupLine {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: usize,
    pub subtotal: String,
}

impl GroupLine {
    pub fn from_group(group: &ItemGroup<'_>, format: &PriceFormat) -> Self {
        Self {
            id: group.id().to_string(),
            name: group.display_name().to_string(),
            unit_price: format.display(group.unit_price()),
            quantity: group.quantity(),
            subtotal: format.display(group.group_price()),
        }
    }
}

/// Summary panel of a non-empty cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPage {
    pub lines: Vec<GroupLine>,
    /// "Cart Total" value.
    pub cart_total: String,
    /// "Quantity" value.
    pub quantity: usize,
    /// "Discount" value, present only while the discount is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    /// "Final" value.
    pub final_price: String,
    pub discount_button: String,
    pub checkout_button: String,
    pub clear_button: String,
    /// Raw numbers behind the strings.
    pub summary: CartSummary,
}

impl SummaryPage {
    pub fn build(groups: &[ItemGroup<'_>], summary: CartSummary, format: &PriceFormat) -> Self {
        Self {
            lines: groups
                .iter()
                .map(|g| GroupLine::from_group(g, format))
                .collect(),
            cart_total: format.display(summary.total_price),
            quantity: summary.total_quantity,
            discount: summary
                .discount_applied
                .then(|| format.display(DISCOUNT)),
            final_price: format.display(summary.final_price),
            discount_button: discount_button_label(summary.discount_applied, format),
            checkout_button: checkout_button_label(summary.total_quantity),
            clear_button: "Empty Cart".to_string(),
            summary,
        }
    }
}

/// "1 item", "2 items", "0 items".
pub fn item_count_label(quantity: usize) -> String {
    if quantity == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", quantity)
    }
}

pub fn checkout_button_label(quantity: usize) -> String {
    format!("Proceed to Buy ({})", item_count_label(quantity))
}

pub fn discount_button_label(discount_applied: bool, format: &PriceFormat) -> String {
    if discount_applied {
        "Remove Discount".to_string()
    } else {
        format!("Apply Discount ({}{})", format.symbol, DISCOUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{compute_summary, group_items, CartItem};

    #[test]
    fn test_item_count_label() {
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(2), "2 items");
        assert_eq!(item_count_label(0), "0 items");
    }

    #[test]
    fn test_discount_button_label() {
        let format = PriceFormat::default();
        assert_eq!(discount_button_label(false, &format), "Apply Discount ($10)");
        assert_eq!(discount_button_label(true, &format), "Remove Discount");
    }

    #[test]
    fn test_summary_page_without_discount() {
        let items = vec![
            CartItem::new("1", 10.0).with_title("Book"),
            CartItem::new("2", 5.0),
            CartItem::new("1", 10.0).with_title("Book"),
        ];
        let groups = group_items(&items);
        let summary = compute_summary(&items, false);
        let page = SummaryPage::build(&groups, summary, &PriceFormat::default());

        assert_eq!(page.cart_total, "$25.00");
        assert_eq!(page.final_price, "$25.00");
        assert_eq!(page.quantity, 3);
        assert!(page.discount.is_none());
        assert_eq!(page.checkout_button, "Proceed to Buy (3 items)");

        assert_eq!(page.lines.len(), 2);
        assert_eq!(page.lines[0].name, "Book");
        assert_eq!(page.lines[0].quantity, 2);
        assert_eq!(page.lines[0].unit_price, "$10.00");
        assert_eq!(page.lines[0].subtotal, "$20.00");
        assert_eq!(page.lines[1].name, "2");
    }

    #[test]
    fn test_summary_page_with_discount() {
        let items = vec![CartItem::new("1", 10.0), CartItem::new("2", 5.0)];
        let groups = group_items(&items);
        let summary = compute_summary(&items, true);
        let page = SummaryPage::build(&groups, summary, &PriceFormat::default());

        assert_eq!(page.cart_total, "$15.00");
        assert_eq!(page.discount.as_deref(), Some("$10.00"));
        assert_eq!(page.final_price, "$5.00");
        assert_eq!(page.discount_button, "Remove Discount");
    }

    #[test]
    fn test_single_item_checkout_label() {
        let items = vec![CartItem::new("1", 1.0)];
        let page = SummaryPage::build(
            &group_items(&items),
            compute_summary(&items, false),
            &PriceFormat::default(),
        );
        assert_eq!(page.checkout_button, "Proceed to Buy (1 item)");
    }

    #[test]
    fn test_empty_page_serializes_with_state_tag() {
        let json = serde_json::to_value(CartPage::empty()).unwrap();
        assert_eq!(json["state"], "empty");
        assert_eq!(json["notice"], EMPTY_CART_NOTICE);
    }
}
