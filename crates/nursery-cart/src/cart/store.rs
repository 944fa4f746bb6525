//! The cart store: owns the line items and applies transitions.

use crate::cart::event::Subscribers;
use crate::cart::totals::{self, CartSummary};
use crate::cart::{CartEvent, LineItem, SubscriptionId};
use crate::catalog::Product;
use crate::error::CartError;
use crate::money::Money;
use std::sync::{Arc, Mutex};

/// A cart store shared between threads. Every transition takes the lock, so
/// writers are serialized.
pub type SharedCart = Arc<Mutex<CartStore>>;

/// Holds the ordered line items of one cart.
///
/// Consumers read the collection through [`items`](Self::items) and change it
/// only through the transitions (`add`, `set_quantity`, `remove` and the
/// helpers built on them). A transition runs to completion before any
/// subscriber sees the new collection. Transitions that change nothing
/// return `false` and notify nobody.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<LineItem>,
    subscribers: Subscribers,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the store for use from several threads.
    pub fn into_shared(self) -> SharedCart {
        Arc::new(Mutex::new(self))
    }

    /// Add one unit of a product.
    ///
    /// If an item with the same name is already in the cart its quantity
    /// goes up by exactly one; otherwise the product is appended with
    /// quantity 1. Returns `false` only if the quantity is already at
    /// `u32::MAX`.
    pub fn add(&mut self, product: &Product) -> bool {
        if let Some(existing) = self.items.iter_mut().find(|i| i.name == product.name) {
            let from = existing.quantity;
            let to = from.saturating_add(1);
            if to == from {
                return false;
            }
            existing.quantity = to;
            tracing::debug!(item = %product.name, from, to, "Cart quantity increased");
            self.emit(CartEvent::QuantityChanged {
                name: product.name.clone(),
                from,
                to,
            });
            return true;
        }

        self.items.push(LineItem::from_product(product));
        tracing::debug!(item = %product.name, "Cart item added");
        self.emit(CartEvent::Added {
            name: product.name.clone(),
            quantity: 1,
        });
        true
    }

    /// Set an item's quantity.
    ///
    /// A quantity below 1 removes the item. Quantities above `u32::MAX` are
    /// clamped. Unknown names are a no-op.
    pub fn set_quantity(&mut self, name: &str, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove(name);
        }
        let to = u32::try_from(quantity).unwrap_or(u32::MAX);

        let Some(item) = self.items.iter_mut().find(|i| i.name == name) else {
            return false;
        };

        let from = item.quantity;
        if from == to {
            return false;
        }
        item.quantity = to;
        let name = item.name.clone();
        tracing::debug!(item = %name, from, to, "Cart quantity set");
        self.emit(CartEvent::QuantityChanged { name, from, to });
        true
    }

    /// Add one to an item's quantity. Unknown names are a no-op.
    pub fn increment(&mut self, name: &str) -> bool {
        match self.get(name) {
            Some(item) => {
                let next = i64::from(item.quantity) + 1;
                self.set_quantity(name, next)
            }
            None => false,
        }
    }

    /// Take one from an item's quantity, removing it when it reaches zero.
    pub fn decrement(&mut self, name: &str) -> bool {
        match self.get(name) {
            Some(item) => {
                let next = i64::from(item.quantity) - 1;
                self.set_quantity(name, next)
            }
            None => false,
        }
    }

    /// Remove an item. Unknown names are a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(index) = self.items.iter().position(|i| i.name == name) else {
            return false;
        };
        let removed = self.items.remove(index);
        tracing::debug!(item = %removed.name, "Cart item removed");
        self.emit(CartEvent::Removed { name: removed.name });
        true
    }

    /// Remove every item.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        tracing::debug!("Cart cleared");
        self.emit(CartEvent::Cleared);
        true
    }

    /// Read-only view of the line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by name.
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Check if an item is in the cart.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities; 0 for an empty cart.
    pub fn total_quantity(&self) -> u64 {
        totals::total_quantity(&self.items)
    }

    /// Sum of line totals; zero for an empty cart.
    pub fn total_amount(&self) -> Result<Money, CartError> {
        totals::total_amount(&self.items)
    }

    /// Cart total formatted to two decimals (e.g. "38.50").
    pub fn total_amount_display(&self) -> Result<String, CartError> {
        Ok(self.total_amount()?.display_amount())
    }

    /// Unit price times quantity for one item.
    pub fn line_total(&self, item: &LineItem) -> Result<Money, CartError> {
        item.line_total()
    }

    /// Line total formatted to two decimals.
    pub fn line_total_display(&self, item: &LineItem) -> Result<String, CartError> {
        item.line_total_display()
    }

    /// Per-line and cart-wide totals.
    pub fn summary(&self) -> Result<CartSummary, CartError> {
        CartSummary::from_items(&self.items)
    }

    /// Register a callback run after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent, &[LineItem]) + Send + 'static,
    {
        self.subscribers.add(Box::new(listener))
    }

    /// Drop a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn emit(&mut self, event: CartEvent) {
        self.subscribers.notify(&event, &self.items);
    }
}
