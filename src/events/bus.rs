// SPDX-License-Identifier: MPL-2.0
//! Publish/subscribe bus for [`SprintEvent`]s.
//!
//! Handlers run synchronously, in subscription order, on the publishing
//! call. They observe events but cannot reach back into the page.

use super::{EventName, SprintEvent};

/// Token returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&SprintEvent)>;

struct Subscriber {
    id: SubscriptionId,
    filter: Option<EventName>,
    handler: Handler,
}

#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: Vec<Subscriber>,
    published: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("published", &self.published)
            .finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `handler` to a single event name.
    pub fn subscribe<F>(&mut self, name: EventName, handler: F) -> SubscriptionId
    where
        F: FnMut(&SprintEvent) + 'static,
    {
        self.add(Some(name), Box::new(handler))
    }

    /// Subscribes `handler` to every event.
    pub fn subscribe_all<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&SprintEvent) + 'static,
    {
        self.add(None, Box::new(handler))
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    pub fn publish(&mut self, event: SprintEvent) {
        let name = event.name();
        tracing::trace!(event = name.as_str(), detail = %event.detail(), "publish");
        self.published += 1;
        for subscriber in &mut self.subscribers {
            if subscriber.filter.is_none_or(|f| f == name) {
                (subscriber.handler)(&event);
            }
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Number of events published since creation.
    #[must_use]
    pub fn published_count(&self) -> u64 {
        self.published
    }

    fn add(&mut self, filter: Option<EventName>, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            filter,
            handler,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn filtered_subscriber_only_sees_its_event() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bus.subscribe(EventName::Teardown, move |e| sink.borrow_mut().push(e.name()));

        bus.publish(SprintEvent::MenuToggle { expanded: true });
        bus.publish(SprintEvent::Teardown);

        assert_eq!(*seen.borrow(), vec![EventName::Teardown]);
        assert_eq!(bus.published_count(), 2);
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            bus.subscribe_all(move |_| order.borrow_mut().push(tag));
        }
        bus.publish(SprintEvent::Teardown);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut bus = EventBus::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = bus.subscribe_all(move |_| *sink.borrow_mut() += 1);

        bus.publish(SprintEvent::Teardown);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(SprintEvent::Teardown);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
