//! Change notifications for cart subscribers.

use crate::cart::LineItem;
use crate::ids::ItemName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a transition changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A new item was appended.
    Added { name: ItemName, quantity: u32 },
    /// An existing item's quantity changed.
    QuantityChanged { name: ItemName, from: u32, to: u32 },
    /// An item left the cart.
    Removed { name: ItemName },
    /// Every item left the cart.
    Cleared,
}

/// Handle returned by [`CartStore::subscribe`](crate::cart::CartStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked with the event and the collection after the change.
pub type Listener = Box<dyn FnMut(&CartEvent, &[LineItem]) + Send>;

/// Observer list.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() < len_before
    }

    pub(crate) fn notify(&mut self, event: &CartEvent, items: &[LineItem]) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event, items);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.listeners.len())
            .finish()
    }
}
