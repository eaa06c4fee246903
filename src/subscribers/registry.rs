//! # Ordered subscriber registry.
//!
//! [`SubscriberRegistry`] owns the one mutable piece of facade state: the
//! ordered list of subscribers. Insertion order is notification order.
//!
//! ## Rules
//! - Duplicate registration of the same handle is permitted; each
//!   occurrence fires once per notification.
//! - [`SubscriberRegistry::unsubscribe`] removes the **first** occurrence
//!   matching by `Arc` identity; removing an unknown handle is a no-op.
//! - The list is mutated only through `subscribe`/`unsubscribe`; the
//!   dispatch worker only ever takes read-only snapshots.
//!
//! Guarded by a `std::sync::RwLock` so registration stays synchronous and
//! callable from non-async code; critical sections are a push, a scan, or a
//! clone.

use std::sync::RwLock;

use crate::subscribers::SubscriberRef;

/// Ordered, duplicate-permitting list of subscribers.
pub(crate) struct SubscriberRegistry {
    subscribers: RwLock<Vec<SubscriberRef>>,
}

impl SubscriberRegistry {
    /// Creates a registry pre-seeded with `subscribers`, in order.
    pub(crate) fn new(subscribers: Vec<SubscriberRef>) -> Self {
        Self {
            subscribers: RwLock::new(subscribers),
        }
    }

    /// Appends a subscriber to the end of the list.
    pub(crate) fn subscribe(&self, subscriber: SubscriberRef) {
        self.subscribers.write().unwrap().push(subscriber);
    }

    /// Removes the first occurrence of `subscriber` (by `Arc` identity).
    ///
    /// Returns `true` if a registration was removed.
    pub(crate) fn unsubscribe(&self, subscriber: &SubscriberRef) -> bool {
        let mut subs = self.subscribers.write().unwrap();
        match subs.iter().position(|s| SubscriberRef::ptr_eq(s, subscriber)) {
            Some(idx) => {
                subs.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Clones the current list, preserving order.
    ///
    /// The dispatch worker calls this at delivery time, so who gets
    /// notified is decided when the notification runs, not when it was
    /// enqueued.
    pub(crate) fn snapshot(&self) -> Vec<SubscriberRef> {
        self.subscribers.read().unwrap().clone()
    }

    /// Number of live registrations.
    pub(crate) fn len(&self) -> usize {
        self.subscribers.read().unwrap().len()
    }
}
