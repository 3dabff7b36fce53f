//! Print the cart page for an items file.

use anyhow::Result;
use serde::Serialize;
use turbo_cart::cart::{compute_summary_strict, CartItem};
use turbo_cart::notify::{Notice, NoticeQueue};
use turbo_cart::page::CartPage;
use turbo_cart::store::MemoryCartStore;
use turbo_cart::view::{CartView, ViewConfig};

use super::SummaryArgs;
use crate::context::Context;

/// Everything the summary command shows: notices raised while building the
/// page, then the page itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub notices: Vec<Notice>,
    pub page: CartPage,
}

/// Build the report for a list of items.
pub fn evaluate(
    items: Vec<CartItem>,
    discount: bool,
    strict: bool,
    config: ViewConfig,
) -> Result<SummaryReport> {
    if strict {
        compute_summary_strict(&items, discount)?;
        tracing::debug!("strict price checks passed");
    }

    let mut view = CartView::with_config(
        MemoryCartStore::with_items(items),
        NoticeQueue::new(),
        config,
    );
    if discount {
        view.toggle_discount();
    }

    let notices = view.notifier_mut().drain();
    Ok(SummaryReport {
        notices,
        page: view.render(),
    })
}

/// Run the summary command.
pub fn run(args: SummaryArgs, ctx: &Context) -> Result<()> {
    let items = ctx.load_items(&args.items)?;
    let report = evaluate(items, args.discount, args.strict, ctx.config.view_config())?;

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    for notice in &report.notices {
        ctx.output.notice(notice);
    }
    ctx.output.page(&report.page);

    Ok(())
}
