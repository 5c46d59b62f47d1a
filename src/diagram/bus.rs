//! In-process publish/subscribe keyed by event name.
//!
//! Subscribers are explicit closures. Each subscription gets an opaque
//! [`SubscriptionId`] drawn from a counter, so removing one subscriber never
//! changes the handle of another.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::DiagramError;

/// Handle returned by [`NotificationBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type Callback<P> = Arc<dyn Fn(&P) -> Result<(), DiagramError> + Send + Sync>;

struct Subscriber<P> {
    id: SubscriptionId,
    callback: Callback<P>,
}

pub struct NotificationBus<P> {
    next_id: u64,
    topics: HashMap<String, Vec<Subscriber<P>>>,
}

impl<P> Default for NotificationBus<P> {
    fn default() -> Self {
        Self {
            next_id: 0,
            topics: HashMap::new(),
        }
    }
}

impl<P> fmt::Debug for NotificationBus<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .topics
            .iter()
            .map(|(topic, subs)| (topic.as_str(), subs.len()))
            .collect();
        f.debug_struct("NotificationBus")
            .field("next_id", &self.next_id)
            .field("topics", &counts)
            .finish()
    }
}

impl<P> NotificationBus<P> {
    /// Register `callback` for `topic`. Callbacks run in registration order.
    pub fn subscribe<F>(&mut self, topic: &str, callback: F) -> SubscriptionId
    where
        F: Fn(&P) -> Result<(), DiagramError> + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.topics
            .entry(topic.to_string())
            .or_default()
            .push(Subscriber {
                id,
                callback: Arc::new(callback),
            });
        id
    }

    /// Remove one subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, topic: &str, id: SubscriptionId) -> bool {
        let Some(subs) = self.topics.get_mut(topic) else {
            return false;
        };
        let Some(index) = subs.iter().position(|sub| sub.id == id) else {
            return false;
        };
        subs.remove(index);
        if subs.is_empty() {
            self.topics.remove(topic);
        }
        true
    }

    /// Deliver `payload` to every subscriber of `topic`, in order.
    ///
    /// Delivery stops at the first failing callback and its error is
    /// returned; later subscribers do not see this publication. On success
    /// returns the number of callbacks invoked.
    pub fn publish(&self, topic: &str, payload: &P) -> Result<usize, DiagramError> {
        let Some(subs) = self.topics.get(topic) else {
            return Ok(0);
        };
        for sub in subs {
            (sub.callback)(payload)?;
        }
        Ok(subs.len())
    }

    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics.get(topic).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    type Log = Arc<Mutex<Vec<(&'static str, u32)>>>;

    fn recorder(log: Log, name: &'static str) -> impl Fn(&u32) -> Result<(), DiagramError> {
        move |payload| {
            log.lock().unwrap().push((name, *payload));
            Ok(())
        }
    }

    #[test]
    fn publish_reaches_subscribers_in_order_once() {
        let log = Log::default();
        let mut bus = NotificationBus::<u32>::default();
        bus.subscribe("tick", recorder(log.clone(), "a"));
        bus.subscribe("tick", recorder(log.clone(), "b"));
        bus.subscribe("tock", recorder(log.clone(), "other"));
        bus.subscribe("tick", recorder(log.clone(), "c"));

        assert_eq!(bus.publish("tick", &7).unwrap(), 3);
        assert_eq!(*log.lock().unwrap(), vec![("a", 7), ("b", 7), ("c", 7)]);
    }

    #[test]
    fn publish_without_subscribers_is_ok() {
        let bus = NotificationBus::<u32>::default();
        assert_eq!(bus.publish("nobody", &1).unwrap(), 0);
    }

    #[test]
    fn ids_are_unique_across_topics() {
        let mut bus = NotificationBus::<u32>::default();
        let a = bus.subscribe("x", |_| Ok(()));
        let b = bus.subscribe("y", |_| Ok(()));
        let c = bus.subscribe("x", |_| Ok(()));
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn unsubscribe_middle_keeps_other_handles_valid() {
        let log = Log::default();
        let mut bus = NotificationBus::<u32>::default();
        let a = bus.subscribe("tick", recorder(log.clone(), "a"));
        let b = bus.subscribe("tick", recorder(log.clone(), "b"));
        let c = bus.subscribe("tick", recorder(log.clone(), "c"));

        assert!(bus.unsubscribe("tick", b));
        assert!(!bus.unsubscribe("tick", b), "second removal is a no-op");
        bus.publish("tick", &1).unwrap();
        assert_eq!(*log.lock().unwrap(), vec![("a", 1), ("c", 1)]);

        // `c` still refers to the same subscriber after `b` went away.
        assert!(bus.unsubscribe("tick", c));
        log.lock().unwrap().clear();
        bus.publish("tick", &2).unwrap();
        assert_eq!(*log.lock().unwrap(), vec![("a", 2)]);

        assert!(bus.unsubscribe("tick", a));
        assert_eq!(bus.subscriber_count("tick"), 0);
    }

    #[test]
    fn unsubscribe_wrong_topic_is_a_no_op() {
        let mut bus = NotificationBus::<u32>::default();
        let id = bus.subscribe("tick", |_| Ok(()));
        assert!(!bus.unsubscribe("tock", id));
        assert_eq!(bus.subscriber_count("tick"), 1);
    }

    #[test]
    fn failing_subscriber_stops_delivery() {
        let log = Log::default();
        let mut bus = NotificationBus::<u32>::default();
        bus.subscribe("tick", recorder(log.clone(), "a"));
        bus.subscribe("tick", |_| {
            Err(DiagramError::UnsupportedShape {
                key: "X".into(),
                value: "x".into(),
            })
        });
        bus.subscribe("tick", recorder(log.clone(), "c"));

        let result = bus.publish("tick", &3);
        assert!(matches!(result, Err(DiagramError::UnsupportedShape { .. })));
        assert_eq!(*log.lock().unwrap(), vec![("a", 3)]);
    }
}
