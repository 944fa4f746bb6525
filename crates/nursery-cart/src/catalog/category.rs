//! Category grouping for the product list.

use crate::catalog::Product;
use crate::ids::CategoryName;
use serde::{Deserialize, Serialize};

/// A named group of products, in listing order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category name.
    pub name: CategoryName,
    /// Products listed under this category.
    pub products: Vec<Product>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<CategoryName>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
        }
    }

    /// Number of products in this category.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the category has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
