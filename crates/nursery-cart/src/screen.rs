//! Presentation model for the cart screen.
//!
//! Front ends render a [`CartScreen`] and route user actions back through
//! [`handle_action`]. Switching back to the product list is the caller's
//! business: it is reached through a [`Navigator`].

use crate::cart::{CartStore, LineItem};
use crate::ids::ItemName;
use serde::Serialize;

/// Label shown where a total cannot be computed.
pub const PRICE_UNAVAILABLE: &str = "price unavailable";

/// Notification shown for the checkout button.
pub const CHECKOUT_NOTICE: &str = "Checkout is coming soon!";

/// Something that can take the user back to the product list.
pub trait Navigator {
    /// Leave the cart and show the catalog.
    fn continue_shopping(&mut self);
}

impl<F: FnMut()> Navigator for F {
    fn continue_shopping(&mut self) {
        self()
    }
}

/// What the cart screen should show.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CartScreen {
    /// Empty-cart placeholder with a single continue-shopping action.
    Empty,
    /// The itemized view.
    Itemized {
        lines: Vec<ScreenLine>,
        total_quantity: u64,
        /// Cart total, or [`PRICE_UNAVAILABLE`].
        total: String,
    },
}

/// One rendered cart row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScreenLine {
    pub name: ItemName,
    pub image: String,
    pub description: Option<String>,
    /// Unit price with symbol, e.g. "$15.00".
    pub cost: String,
    pub quantity: u32,
    /// Line total, or [`PRICE_UNAVAILABLE`].
    pub subtotal: String,
}

impl ScreenLine {
    fn from_item(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            image: item.image.clone(),
            description: item.description.clone(),
            cost: item.cost_label(),
            quantity: item.quantity,
            subtotal: item
                .line_total()
                .map(|m| m.display())
                .unwrap_or_else(|_| PRICE_UNAVAILABLE.to_string()),
        }
    }
}

impl CartScreen {
    /// Build the screen from the current cart contents.
    ///
    /// A line whose total cannot be computed is shown as unavailable instead
    /// of failing the whole screen.
    pub fn from_store(store: &CartStore) -> Self {
        if store.is_empty() {
            return CartScreen::Empty;
        }

        let lines = store.items().iter().map(ScreenLine::from_item).collect();
        let total = match store.total_amount() {
            Ok(amount) => amount.display(),
            Err(error) => {
                tracing::warn!(%error, "Cart total unavailable");
                PRICE_UNAVAILABLE.to_string()
            }
        };

        CartScreen::Itemized {
            lines,
            total_quantity: store.total_quantity(),
            total,
        }
    }

    /// Check if this is the empty placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self, CartScreen::Empty)
    }
}

/// A user action on the cart screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Increment(ItemName),
    Decrement(ItemName),
    Remove(ItemName),
    ContinueShopping,
    Checkout,
}

/// What happened in response to a [`CartAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A transition ran; `true` if the cart changed.
    Updated(bool),
    /// The navigator was invoked.
    Navigated,
    /// A notification should be shown; the cart is untouched.
    Notice(&'static str),
}

/// Route a cart-screen action to the store or the navigator.
pub fn handle_action(
    store: &mut CartStore,
    action: &CartAction,
    navigator: &mut dyn Navigator,
) -> ActionOutcome {
    match action {
        CartAction::Increment(name) => ActionOutcome::Updated(store.increment(name.as_str())),
        CartAction::Decrement(name) => ActionOutcome::Updated(store.decrement(name.as_str())),
        CartAction::Remove(name) => ActionOutcome::Updated(store.remove(name.as_str())),
        CartAction::ContinueShopping => {
            navigator.continue_shopping();
            ActionOutcome::Navigated
        }
        CartAction::Checkout => ActionOutcome::Notice(CHECKOUT_NOTICE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn store_with_items() -> CartStore {
        let mut store = CartStore::new();
        let fern = Product::new("Fern", Money::from_cents(1500)).with_description("Shade lover");
        store.add(&fern);
        store.add(&fern);
        store.add(&Product::new("Moss", Money::from_cents(850)));
        store
    }

    #[test]
    fn test_empty_screen() {
        let store = CartStore::new();
        assert!(CartScreen::from_store(&store).is_empty());
    }

    #[test]
    fn test_itemized_screen() {
        let store = store_with_items();
        let CartScreen::Itemized {
            lines,
            total_quantity,
            total,
        } = CartScreen::from_store(&store)
        else {
            panic!("expected itemized screen");
        };

        assert_eq!(total_quantity, 3);
        assert_eq!(total, "$38.50");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].subtotal, "$30.00");
        assert_eq!(lines[0].cost, "$15.00");
        assert_eq!(lines[0].description.as_deref(), Some("Shade lover"));
    }

    #[test]
    fn test_unavailable_line_does_not_fail_screen() {
        let mut store = CartStore::new();
        let gold = Product::new("Gold Fern", Money::from_cents(i64::MAX));
        store.add(&gold);
        store.add(&gold);
        store.add(&Product::new("Moss", Money::from_cents(850)));

        let CartScreen::Itemized { lines, total, .. } = CartScreen::from_store(&store) else {
            panic!("expected itemized screen");
        };
        assert_eq!(lines[0].subtotal, PRICE_UNAVAILABLE);
        assert_eq!(lines[1].subtotal, "$8.50");
        assert_eq!(total, PRICE_UNAVAILABLE);
    }

    #[test]
    fn test_continue_shopping_invokes_navigator() {
        let mut store = store_with_items();
        let mut calls = 0;
        let mut nav = || calls += 1;

        let outcome = handle_action(&mut store, &CartAction::ContinueShopping, &mut nav);

        assert_eq!(outcome, ActionOutcome::Navigated);
        assert_eq!(calls, 1);
        assert_eq!(store.total_quantity(), 3);
    }

    #[test]
    fn test_checkout_is_a_notice_only() {
        let mut store = store_with_items();
        let mut nav = || {};
        let outcome = handle_action(&mut store, &CartAction::Checkout, &mut nav);

        assert_eq!(outcome, ActionOutcome::Notice(CHECKOUT_NOTICE));
        assert_eq!(store.total_quantity(), 3);
    }

    #[test]
    fn test_actions_route_to_transitions() {
        let mut store = store_with_items();
        let mut nav = || {};
        let moss = ItemName::new("Moss");

        handle_action(&mut store, &CartAction::Increment(moss.clone()), &mut nav);
        assert_eq!(store.get("Moss").unwrap().quantity, 2);

        handle_action(&mut store, &CartAction::Decrement(moss.clone()), &mut nav);
        handle_action(&mut store, &CartAction::Decrement(moss.clone()), &mut nav);
        assert!(!store.contains("Moss"));

        let outcome = handle_action(&mut store, &CartAction::Remove(moss), &mut nav);
        assert_eq!(outcome, ActionOutcome::Updated(false));
    }
}
