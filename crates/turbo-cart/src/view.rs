//! Cart view state.
//!
//! [`CartView`] is the stateful shell around the pure summary engine. It
//! owns the discount flag, reads items from a [`CartStore`], and writes
//! notices to a [`Notifier`] on user actions.

use crate::cart::{group_items, summarize, CartSummary};
use crate::money::PriceFormat;
use crate::notify::{NoticeOptions, Notifier};
use crate::page::{CartPage, SummaryPage};
use crate::store::CartStore;
use serde::{Deserialize, Serialize};

/// Notice texts and styles used by the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Message shown when the discount is switched on.
    pub discount_message: String,
    /// How long the discount notice stays visible.
    pub discount_duration_ms: u64,
    pub discount_icon: String,
    /// Message shown after checkout.
    pub checkout_message: String,
    pub checkout_icon: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            discount_message: "Discount Applied".to_string(),
            discount_duration_ms: 1000,
            discount_icon: "👏".to_string(),
            checkout_message: "Checkout Successful".to_string(),
            checkout_icon: "🚀".to_string(),
        }
    }
}

/// View settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub display: PriceFormat,
    #[serde(default)]
    pub notices: NoticeConfig,
}

/// The cart page controller.
pub struct CartView<S, N> {
    store: S,
    notifier: N,
    discount_applied: bool,
    config: ViewConfig,
}

impl<S: CartStore, N: Notifier> CartView<S, N> {
    /// Create a view with default settings and no discount.
    pub fn new(store: S, notifier: N) -> Self {
        Self::with_config(store, notifier, ViewConfig::default())
    }

    pub fn with_config(store: S, notifier: N, config: ViewConfig) -> Self {
        Self {
            store,
            notifier,
            discount_applied: false,
            config,
        }
    }

    pub fn discount_applied(&self) -> bool {
        self.discount_applied
    }

    /// Flip the discount flag and return the new value.
    ///
    /// Only switching the discount on sends a notice.
    pub fn toggle_discount(&mut self) -> bool {
        let was_applied = self.discount_applied;
        self.discount_applied = !was_applied;

        if !was_applied {
            let notices = &self.config.notices;
            self.notifier.notify(
                &notices.discount_message,
                NoticeOptions {
                    duration_ms: notices.discount_duration_ms,
                    icon: notices.discount_icon.clone(),
                },
            );
        }

        tracing::info!(discount_applied = self.discount_applied, "toggled discount");
        self.discount_applied
    }

    /// Current summary, or `None` for an empty cart.
    pub fn summary(&self) -> Option<CartSummary> {
        let items = self.store.items();
        if items.is_empty() {
            return None;
        }
        Some(summarize(&group_items(&items), self.discount_applied))
    }

    /// Confirm the purchase of the current cart.
    ///
    /// Sends a success notice and returns the summary that was checked out.
    /// The cart is left untouched. Does nothing on an empty cart.
    pub fn checkout(&mut self) -> Option<CartSummary> {
        let summary = self.summary()?;
        let notices = &self.config.notices;
        self.notifier
            .notify_success(&notices.checkout_message, &notices.checkout_icon);
        tracing::info!(
            total_quantity = summary.total_quantity,
            final_price = summary.final_price,
            "checkout confirmed"
        );
        Some(summary)
    }

    /// Remove every item from the store.
    pub fn clear_cart(&mut self) {
        self.store.clear();
    }

    /// Build the page from the store's current contents.
    pub fn render(&self) -> CartPage {
        let items = self.store.items();
        if items.is_empty() {
            return CartPage::empty();
        }
        let groups = group_items(&items);
        let summary = summarize(&groups, self.discount_applied);
        CartPage::Summary(SummaryPage::build(
            &groups,
            summary,
            &self.config.display,
        ))
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_parts(self) -> (S, N) {
        (self.store, self.notifier)
    }
}
