//! Single-slot latest-value broadcast channel.
//!
//! # Responsibility
//! - Hold the most recent published value of one observable stream.
//! - Notify all registered observers on every publish.
//!
//! # Invariants
//! - A new publish supersedes the previous value; consumers never see
//!   history through `value()`.
//! - Observers run on the publishing thread; marshalling back to a UI
//!   context is the scheduler collaborator's concern.

use std::sync::{Arc, Mutex};

type Observer<T> = Box<dyn Fn(&T) + Send>;

struct Shared<T> {
    slot: Mutex<Option<T>>,
    observers: Mutex<Vec<Observer<T>>>,
}

/// Cloneable handle to a shared latest-value slot.
///
/// All clones publish into, and observe, the same slot.
pub struct LiveValue<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for LiveValue<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Default for LiveValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LiveValue<T> {
    /// Creates an empty slot with no observers.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(None),
                observers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Registers an observer invoked for every subsequent publish.
    pub fn observe(&self, observer: impl Fn(&T) + Send + 'static) {
        let mut observers = self
            .shared
            .observers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        observers.push(Box::new(observer));
    }
}

impl<T: Clone> LiveValue<T> {
    /// Replaces the slot value and notifies all current observers.
    pub fn publish(&self, value: T) {
        {
            let mut slot = self
                .shared
                .slot
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *slot = Some(value.clone());
        }

        // The slot lock is released before observers run, so an observer
        // may call `value()` and sees the value it was notified with.
        let observers = self
            .shared
            .observers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for observer in observers.iter() {
            observer(&value);
        }
    }

    /// Returns a copy of the latest published value, if any.
    pub fn value(&self) -> Option<T> {
        self.shared
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::LiveValue;
    use std::sync::{Arc, Mutex};

    #[test]
    fn publish_replaces_latest_value() {
        let live = LiveValue::new();
        assert_eq!(live.value(), None);

        live.publish(1);
        live.publish(2);
        assert_eq!(live.value(), Some(2));
    }

    #[test]
    fn observers_see_every_publish_in_order() {
        let live = LiveValue::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        live.observe(move |value: &i32| sink.lock().unwrap().push(*value));

        live.publish(1);
        live.publish(2);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn clones_share_one_slot() {
        let live = LiveValue::new();
        let handle = live.clone();

        handle.publish("hello");
        assert_eq!(live.value(), Some("hello"));
    }
}
