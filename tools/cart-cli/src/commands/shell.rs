//! Interactive cart page.

use anyhow::Result;
use dialoguer::{Confirm, Select};
use turbo_cart::notify::{NoticeQueue, Notifier};
use turbo_cart::page::{CartPage, SummaryPage};
use turbo_cart::store::{CartStore, MemoryCartStore};
use turbo_cart::view::CartView;

use super::ShellArgs;
use crate::context::Context;

/// A button on the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    ToggleDiscount,
    Checkout,
    EmptyCart,
    Quit,
}

/// Buttons offered for a page, with their labels, top to bottom.
pub fn actions_for(page: &SummaryPage) -> Vec<(ShellAction, String)> {
    vec![
        (ShellAction::ToggleDiscount, page.discount_button.clone()),
        (ShellAction::Checkout, page.checkout_button.clone()),
        (ShellAction::EmptyCart, page.clear_button.clone()),
        (ShellAction::Quit, "Quit".to_string()),
    ]
}

/// Apply one action to the view. Returns `false` when the loop should stop.
pub fn apply<S: CartStore, N: Notifier>(view: &mut CartView<S, N>, action: ShellAction) -> bool {
    match action {
        ShellAction::ToggleDiscount => {
            view.toggle_discount();
        }
        ShellAction::Checkout => {
            view.checkout();
        }
        ShellAction::EmptyCart => view.clear_cart(),
        ShellAction::Quit => return false,
    }
    true
}

/// Run the shell command.
pub fn run(args: ShellArgs, ctx: &Context) -> Result<()> {
    let items = ctx.load_items(&args.items)?;
    let mut view = CartView::with_config(
        MemoryCartStore::with_items(items),
        NoticeQueue::new(),
        ctx.config.view_config(),
    );

    loop {
        let page = view.render();
        ctx.output.page(&page);

        let summary = match &page {
            CartPage::Summary(summary) => summary,
            CartPage::Empty { .. } => return Ok(()),
        };

        let actions = actions_for(summary);
        let labels: Vec<&str> = actions.iter().map(|(_, label)| label.as_str()).collect();
        let choice = Select::new()
            .with_prompt("Choose an action")
            .items(&labels)
            .default(0)
            .interact()?;
        let action = actions[choice].0;

        if action == ShellAction::EmptyCart && !args.yes {
            let confirmed = Confirm::new()
                .with_prompt("Remove every item from the cart?")
                .default(false)
                .interact()?;
            if !confirmed {
                ctx.output.warn("Cart left unchanged");
                continue;
            }
        }

        let keep_going = apply(&mut view, action);
        for notice in view.notifier_mut().drain() {
            ctx.output.notice(&notice);
        }
        if !keep_going {
            return Ok(());
        }
    }
}
