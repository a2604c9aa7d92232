/*
    Copyright 2025 TII (SSRC) and the contributors
    SPDX-License-Identifier: Apache-2.0
*/
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle for a registered subscriber, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

impl SubscriptionId {
    fn new() -> Self {
        Self(NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

struct Subscriber<T> {
    id: SubscriptionId,
    callback: Rc<dyn Fn(&T)>,
}

/// Registry of typed event subscribers with synchronous, in-order delivery.
///
/// Subscribers are cloned out before invocation, so a callback may
/// subscribe or unsubscribe without poisoning the borrow.
pub struct Subscriptions<T> {
    inner: RefCell<Vec<Subscriber<T>>>,
}

impl<T> Subscriptions<T> {
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(Vec::new()),
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId::new();
        self.inner.borrow_mut().push(Subscriber {
            id,
            callback: Rc::new(callback),
        });
        id
    }

    /// Returns `true` if the subscriber was present and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let len_before = inner.len();
        inner.retain(|s| s.id != id);
        inner.len() < len_before
    }

    pub fn notify(&self, event: &T) {
        let callbacks: Vec<_> = self
            .inner
            .borrow()
            .iter()
            .map(|s| s.callback.clone())
            .collect();
        for cb in callbacks {
            cb(event);
        }
    }
}

impl<T> Default for Subscriptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribe_and_notify() {
        let subs: Subscriptions<i32> = Subscriptions::new();
        let total = Rc::new(Cell::new(0));

        let total_clone = total.clone();
        let _id = subs.subscribe(move |v| total_clone.set(total_clone.get() + *v));

        subs.notify(&5);
        subs.notify(&3);
        assert_eq!(total.get(), 8);
    }

    #[test]
    fn delivery_order_matches_registration_order() {
        let subs: Subscriptions<&str> = Subscriptions::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        subs.subscribe(move |s| seen_clone.borrow_mut().push(format!("a:{s}")));
        let seen_clone = seen.clone();
        subs.subscribe(move |s| seen_clone.borrow_mut().push(format!("b:{s}")));

        subs.notify(&"x");
        assert_eq!(*seen.borrow(), vec!["a:x", "b:x"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let subs: Subscriptions<i32> = Subscriptions::new();
        let total = Rc::new(Cell::new(0));

        let total_clone = total.clone();
        let id = subs.subscribe(move |v| total_clone.set(total_clone.get() + *v));

        subs.notify(&1);
        assert!(subs.unsubscribe(id));
        subs.notify(&1);
        assert_eq!(total.get(), 1);

        // Removing the same id twice reports absence.
        assert!(!subs.unsubscribe(id));
    }

    #[test]
    fn callback_may_resubscribe_during_notify() {
        let subs: Rc<Subscriptions<()>> = Rc::new(Subscriptions::new());
        let fired = Rc::new(Cell::new(0));

        let subs_clone = subs.clone();
        let fired_clone = fired.clone();
        subs.subscribe(move |_| {
            fired_clone.set(fired_clone.get() + 1);
            let inner_fired = fired_clone.clone();
            subs_clone.subscribe(move |_| inner_fired.set(inner_fired.get() + 10));
        });

        subs.notify(&());
        assert_eq!(fired.get(), 1);
        subs.notify(&());
        // The original subscriber plus one late subscriber fire now.
        assert!(fired.get() >= 12);
    }
}
