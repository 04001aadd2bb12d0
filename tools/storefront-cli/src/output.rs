//! Output formatting for the CLI.

use console::style;
use storefront_commerce::cart::{Badge, CartSummary, EMPTY_CART_HINT, EMPTY_CART_TITLE};

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

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print the cart summary panel.
    pub fn cart_summary(&self, summary: &CartSummary) {
        if self.json {
            self.json(summary);
            return;
        }

        self.header(&summary.heading);
        if summary.is_empty() {
            self.info(EMPTY_CART_TITLE);
            self.info(EMPTY_CART_HINT);
            return;
        }

        let widths = [4, 32, 10, 5, 12];
        self.table_row(&["#", "Item", "Price", "Qty", "Line total"], &widths);
        for line in &summary.lines {
            let position = (line.index + 1).to_string();
            let quantity = line.quantity.to_string();
            let total = line.line_total.display();
            self.table_row(
                &[
                    position.as_str(),
                    line.title.as_str(),
                    line.price.as_str(),
                    quantity.as_str(),
                    total.as_str(),
                ],
                &widths,
            );
        }
        println!();
        println!("  {}", style(&summary.total_text).bold());
        println!("  {}", badge("Cart", &summary.badge));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Render an icon badge, dimmed when it would be hidden.
pub fn badge(label: &str, badge: &Badge) -> String {
    let text = format!("{} [{}]", label, badge.count);
    if badge.visible {
        style(text).cyan().to_string()
    } else {
        style(text).dim().to_string()
    }
}
