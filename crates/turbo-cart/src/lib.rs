//! Cart summary and cart view logic for TurboCommerce.
//!
//! - **Cart**: cart items, grouping of duplicate items, the summary engine
//! - **Store**: the [`CartStore`] capability the view reads items from
//! - **Notify**: the [`Notifier`] capability for transient user feedback
//! - **Page**: display strings for the cart page
//! - **View**: discount state, checkout and clear actions
//!
//! # Example
//!
//! ```rust
//! use turbo_cart::prelude::*;
//!
//! let items = vec![
//!     CartItem::new("1", 10.0),
//!     CartItem::new("2", 5.0),
//!     CartItem::new("1", 10.0),
//! ];
//!
//! let summary = compute_summary(&items, true);
//! assert_eq!(summary.total_price, 25.0);
//! assert_eq!(summary.total_quantity, 3);
//! assert_eq!(summary.final_price, 15.0);
//!
//! let mut view = CartView::new(MemoryCartStore::with_items(items), NoticeQueue::new());
//! view.toggle_discount();
//! assert_eq!(view.notifier().len(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod notify;
pub mod page;
pub mod store;
pub mod view;

pub use error::CartError;
pub use ids::ProductId;
pub use money::{PriceFormat, DISCOUNT};
pub use notify::Notifier;
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::{round2, PriceFormat, DISCOUNT};

    // Cart
    pub use crate::cart::{
        compute_summary, compute_summary_strict, group_items, CartItem, CartSummary, ItemGroup,
    };

    // Capabilities
    pub use crate::notify::{Notice, NoticeKind, NoticeOptions, NoticeQueue, Notifier, TracingNotifier};
    pub use crate::store::{CartStore, MemoryCartStore};

    // View
    pub use crate::page::{CartPage, GroupLine, SummaryPage};
    pub use crate::view::{CartView, NoticeConfig, ViewConfig};
}
