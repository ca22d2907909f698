//! Change notification.
//!
//! Observers are plain callbacks, invoked synchronously after every successful
//! mutation with the kind of change and the full collection as it now stands.
//! They receive a shared slice, so they can re-render but never mutate; any
//! change has to go back through [`crate::api::CollectionStore`].

use crate::model::CoffeeEntry;
use uuid::Uuid;

/// What happened to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The collection was replaced by the sample coffees.
    Seeded,
    Added(Uuid),
    CheckedIn(Uuid),
    FavoriteToggled { id: Uuid, is_favorite: bool },
    TastedToggled { id: Uuid, tasted: bool },
    Deleted(Vec<Uuid>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Observer = Box<dyn FnMut(&Change, &[CoffeeEntry]) + Send>;

#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Calls every observer in subscription order.
    pub fn broadcast(&mut self, change: &Change, entries: &[CoffeeEntry]) {
        for (_, observer) in self.observers.iter_mut() {
            observer(change, entries);
        }
    }
}
