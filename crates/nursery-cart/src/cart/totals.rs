//! Derived cart totals.
//!
//! Totals are computed on demand from the current line items and never
//! stored alongside them.

use crate::cart::LineItem;
use crate::error::CartError;
use crate::ids::ItemName;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for the whole cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities.
    pub total_quantity: u64,
    /// Sum of line totals.
    pub total_amount: Money,
}

impl CartSummary {
    /// Compute the summary for a set of line items.
    ///
    /// Each line total is computed independently; the cart total is their sum.
    pub fn from_items(items: &[LineItem]) -> Result<Self, CartError> {
        let lines = items
            .iter()
            .map(LineSummary::from_item)
            .collect::<Result<Vec<_>, _>>()?;

        let total_amount =
            Money::try_sum(lines.iter().map(|l| &l.line_total)).ok_or(CartError::Overflow)?;

        Ok(Self {
            total_quantity: total_quantity(items),
            total_amount,
            lines,
        })
    }

    /// Check if the cart had no items.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct items.
    pub fn unique_items(&self) -> usize {
        self.lines.len()
    }

    /// Cart total formatted to two decimals.
    pub fn total_display(&self) -> String {
        self.total_amount.display_amount()
    }
}

/// Totals for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineSummary {
    /// Item name.
    pub name: ItemName,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// unit_price * quantity.
    pub line_total: Money,
}

impl LineSummary {
    /// Compute the line summary for an item.
    pub fn from_item(item: &LineItem) -> Result<Self, CartError> {
        Ok(Self {
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            line_total: item.line_total()?,
        })
    }
}

/// Sum of quantities across items; 0 for none.
pub(crate) fn total_quantity(items: &[LineItem]) -> u64 {
    items.iter().map(|i| u64::from(i.quantity)).sum()
}

/// Sum of line totals across items.
pub(crate) fn total_amount(items: &[LineItem]) -> Result<Money, CartError> {
    items.iter().try_fold(Money::zero(), |acc, item| {
        acc.checked_add(&item.line_total()?).ok_or(CartError::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn item(name: &str, cents: i64, quantity: u32) -> LineItem {
        let mut item = LineItem::from_product(&Product::new(name, Money::from_cents(cents)));
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_summary() {
        let items = vec![item("Fern", 1500, 2), item("Moss", 850, 1)];
        let summary = CartSummary::from_items(&items).unwrap();

        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.total_display(), "38.50");
        assert_eq!(summary.unique_items(), 2);
        assert_eq!(summary.lines[0].line_total.cents(), 3000);
        assert_eq!(summary.lines[1].line_total.cents(), 850);
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::from_items(&[]).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.total_quantity, 0);
        assert_eq!(summary.total_display(), "0.00");
    }

    #[test]
    fn test_total_amount_overflow() {
        let items = vec![item("A", i64::MAX, 1), item("B", 1, 1)];
        assert_eq!(total_amount(&items), Err(CartError::Overflow));
        assert_eq!(CartSummary::from_items(&items), Err(CartError::Overflow));
    }
}
