//! Output formatting for the CLI.

use console::style;
use nursery_cart::catalog::Product;
use nursery_cart::screen::CartScreen;

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

    /// Print a product line for the catalog listing.
    pub fn product(&self, product: &Product, show_description: bool) {
        if self.json {
            return;
        }
        self.list_item(&format!(
            "{} {}",
            style(&product.name).bold(),
            product.price.display()
        ));
        if show_description {
            if let Some(ref description) = product.description {
                println!("      {}", style(description).dim());
            }
        }
    }

    /// Render the cart screen.
    pub fn cart_screen(&self, screen: &CartScreen) {
        if self.json {
            self.json(screen);
            return;
        }

        match screen {
            CartScreen::Empty => {
                self.header("Your cart is empty");
                self.info("Continue shopping to add some plants.");
            }
            CartScreen::Itemized {
                lines,
                total_quantity,
                total,
            } => {
                self.header("Shopping Cart");
                let widths = [24, 10, 5, 12];
                self.table_row(&["Plant", "Price", "Qty", "Subtotal"], &widths);
                for line in lines {
                    let quantity = line.quantity.to_string();
                    self.table_row(
                        &[line.name.as_str(), &line.cost, &quantity, &line.subtotal],
                        &widths,
                    );
                }
                println!();
                self.kv("Items", &total_quantity.to_string());
                self.kv("Total", &style(total).bold().to_string());
            }
        }
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}
