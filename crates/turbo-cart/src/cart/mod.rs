//! Shopping cart module.
//!
//! Contains cart items, grouping of duplicates, and the summary engine.

mod group;
mod item;
mod summary;

pub use group::{group_items, ItemGroup};
pub use item::{items_from_json, CartItem};
pub use summary::{compute_summary, compute_summary_strict, summarize, CartSummary};
