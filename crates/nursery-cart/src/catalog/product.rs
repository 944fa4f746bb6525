//! Product listing and typed product.

use crate::error::CartError;
use crate::ids::{CategoryName, ItemName};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product entry as it appears in a catalog file.
///
/// The cost is still the raw, currency-prefixed string (e.g. `"$15"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductListing {
    /// Product name (unique across the catalog).
    pub name: String,
    /// Image URL or path, opaque to the cart.
    pub image: String,
    /// Currency-prefixed decimal price.
    pub cost: String,
    /// Display-only description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A product whose price has been parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Product name, also the cart key.
    pub name: ItemName,
    /// Image URL or path.
    pub image: String,
    /// Unit price.
    pub price: Money,
    /// Display-only description.
    pub description: Option<String>,
    /// Category the product is listed under.
    pub category: CategoryName,
}

impl Product {
    /// Create a product directly from typed parts.
    pub fn new(name: impl Into<ItemName>, price: Money) -> Self {
        Self {
            name: name.into(),
            image: String::new(),
            price,
            description: None,
            category: CategoryName::new("Uncategorized"),
        }
    }

    /// Parse a listing into a product. This is the only place a cost string
    /// is turned into [`Money`].
    pub fn from_listing(
        listing: ProductListing,
        category: CategoryName,
    ) -> Result<Self, CartError> {
        let price = Money::parse_price(&listing.cost)?;
        Ok(Self {
            name: ItemName::new(listing.name),
            image: listing.image,
            price,
            description: listing.description,
            category,
        })
    }

    /// Set the image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(cost: &str) -> ProductListing {
        ProductListing {
            name: "Fern".to_string(),
            image: "https://example.com/fern.jpg".to_string(),
            cost: cost.to_string(),
            description: Some("Loves shade".to_string()),
        }
    }

    #[test]
    fn test_from_listing() {
        let product =
            Product::from_listing(listing("$15"), CategoryName::new("Shade Plants")).unwrap();
        assert_eq!(product.name, "Fern");
        assert_eq!(product.price.cents(), 1500);
        assert_eq!(product.category, "Shade Plants");
        assert_eq!(product.description.as_deref(), Some("Loves shade"));
    }

    #[test]
    fn test_from_listing_malformed_price() {
        let result = Product::from_listing(listing("fifteen"), CategoryName::new("Shade Plants"));
        assert!(matches!(result, Err(CartError::MalformedPrice { .. })));
    }

    #[test]
    fn test_listing_without_description() {
        let json = r#"{"name":"Moss","image":"moss.jpg","cost":"$8.50"}"#;
        let listing: ProductListing = serde_json::from_str(json).unwrap();
        assert!(listing.description.is_none());
    }
}
