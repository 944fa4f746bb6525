//! Cart state and derived totals for the Nursery storefront.
//!
//! - **Catalog**: product listings grouped by category, prices parsed once
//! - **Cart**: the cart store with add / set-quantity / remove transitions,
//!   change subscriptions and derived totals
//! - **Screen**: the cart screen model and the continue-shopping hook
//!
//! # Example
//!
//! ```rust
//! use nursery_cart::prelude::*;
//!
//! let fern = Product::new("Fern", Money::parse_price("$15").unwrap());
//!
//! let mut cart = CartStore::new();
//! cart.add(&fern);
//! cart.add(&fern);
//!
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.total_amount_display().unwrap(), "30.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod screen;

pub use error::CartError;
pub use ids::{CategoryName, ItemName};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::{CategoryName, ItemName};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogLoad, Category, Product, ProductListing};

    // Cart
    pub use crate::cart::{
        CartEvent, CartStore, CartSummary, LineItem, LineSummary, SharedCart, SubscriptionId,
    };

    // Screen
    pub use crate::screen::{handle_action, ActionOutcome, CartAction, CartScreen, Navigator};
}
