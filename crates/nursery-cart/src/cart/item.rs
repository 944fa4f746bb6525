//! Cart line items.

use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ItemName;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
///
/// Items are only created and mutated by [`CartStore`](crate::cart::CartStore),
/// which keeps `quantity >= 1` for every item it holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product name, unique within the cart.
    pub name: ItemName,
    /// Image URL or path.
    pub image: String,
    /// Unit price.
    pub unit_price: Money,
    /// Display-only description.
    pub description: Option<String>,
    /// Quantity.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item for a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            description: product.description.clone(),
            quantity: 1,
        }
    }

    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> Result<Money, CartError> {
        self.unit_price
            .checked_mul(self.quantity)
            .ok_or(CartError::Overflow)
    }

    /// Line total formatted to two decimals (e.g. "30.00").
    pub fn line_total_display(&self) -> Result<String, CartError> {
        Ok(self.line_total()?.display_amount())
    }

    /// Unit price in catalog form (e.g. "$15.00").
    pub fn cost_label(&self) -> String {
        self.unit_price.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_product() {
        let product = Product::new("Fern", Money::from_cents(1500)).with_image("fern.jpg");
        let item = LineItem::from_product(&product);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.image, "fern.jpg");
        assert_eq!(item.cost_label(), "$15.00");
    }

    #[test]
    fn test_line_total() {
        let mut item = LineItem::from_product(&Product::new("Moss", Money::from_cents(850)));
        item.quantity = 3;
        assert_eq!(item.line_total().unwrap().cents(), 2550);
        assert_eq!(item.line_total_display().unwrap(), "25.50");
    }

    #[test]
    fn test_line_total_overflow() {
        let mut item = LineItem::from_product(&Product::new("Gold Fern", Money::from_cents(i64::MAX)));
        item.quantity = 2;
        assert_eq!(item.line_total(), Err(CartError::Overflow));
    }
}
