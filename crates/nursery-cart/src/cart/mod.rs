//! Shopping cart module.
//!
//! Contains the cart store, line items, change events and derived totals.

mod event;
mod item;
mod store;
mod totals;

pub use event::{CartEvent, Listener, SubscriptionId};
pub use item::LineItem;
pub use store::{CartStore, SharedCart};
pub use totals::{CartSummary, LineSummary};
