//! Output formatting for the CLI.

use console::style;
use turbo_cart::notify::{Notice, NoticeKind};
use turbo_cart::page::{CartPage, SummaryPage};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a transient notice as a one-off line.
    pub fn notice(&self, notice: &Notice) {
        if self.json {
            if let Some(line) = notice_json(notice) {
                println!("{}", line);
            }
            return;
        }
        let line = format!("{} {}", notice.icon, notice.message);
        match notice.kind {
            NoticeKind::Success => println!("{}", style(line).green().bold()),
            NoticeKind::Info => println!("{}", style(line).cyan()),
        }
    }

    /// Print the cart page.
    pub fn page(&self, page: &CartPage) {
        if self.json {
            self.json(page);
            return;
        }
        match page {
            CartPage::Empty { notice } => println!("\n{}", style(notice).bold()),
            CartPage::Summary(summary) => self.summary_page(summary),
        }
    }

    fn summary_page(&self, page: &SummaryPage) {
        self.header("Cart");
        for line in &page.lines {
            self.list_item(&format!(
                "{} {} x {} = {}",
                style(&line.name).bold(),
                line.unit_price,
                line.quantity,
                line.subtotal
            ));
        }

        self.header("Summary");
        self.kv("Cart Total", &style(&page.cart_total).bold().to_string());
        self.kv("Quantity", &style(page.quantity).bold().to_string());
        if let Some(discount) = &page.discount {
            self.kv("Discount", &style(discount).red().to_string());
        }
        println!("  {}", style("─".repeat(24)).dim());
        println!("  Final: {}", style(&page.final_price).bold());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// One-line JSON form of a notice.
fn notice_json(notice: &Notice) -> Option<String> {
    serde_json::to_string(&serde_json::json!({ "notice": notice })).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_json_line() {
        let notice = Notice {
            kind: NoticeKind::Success,
            message: "Checkout Successful".to_string(),
            icon: "🚀".to_string(),
            duration_ms: None,
        };
        let line = notice_json(&notice).unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["notice"]["message"], "Checkout Successful");
        assert!(value["notice"].get("duration_ms").is_none());
    }
}
