//! Memento primitives: snapshot, originator and undo history.
//!
//! # Responsibility
//! - Capture immutable snapshots of a mutable object's state.
//! - Keep a bounded last-in-first-out history for undo.
//!
//! # Invariants
//! - A `Memento` never changes after capture.
//! - History length never exceeds the configured capacity; the oldest
//!   snapshot is evicted first.
//! - Undo on an empty history is a checked error, never a panic.

use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default number of snapshots kept per editing session.
pub const DEFAULT_UNDO_CAPACITY: usize = 64;

/// Immutable capture of a value at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento<T> {
    value: T,
}

impl<T> Memento<T> {
    /// Wraps `value` into a snapshot.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the captured value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the captured value.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// The mutable object whose state a `Memento` captures and restores.
pub trait Originator<T> {
    /// Returns a snapshot of the current state.
    fn capture(&self) -> Memento<T>;

    /// Replaces the current state with the captured one.
    fn restore(&mut self, snapshot: Memento<T>);
}

/// Error returned when undo is requested with no recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    EmptyHistory,
}

impl Display for UndoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyHistory => write!(f, "undo history is empty"),
        }
    }
}

impl Error for UndoError {}

/// Owner of the undo history for one originator.
///
/// Created alongside the editor it watches and discarded with the
/// editing session; history is never persisted.
pub struct Caretaker<T> {
    history: VecDeque<Memento<T>>,
    capacity: usize,
}

impl<T> Default for Caretaker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Caretaker<T> {
    /// Creates a caretaker with the default snapshot capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }

    /// Creates a caretaker keeping at most `capacity` snapshots.
    ///
    /// A zero capacity is rounded up to one so `save` always records
    /// something.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Captures the originator's current state onto the history.
    ///
    /// When the history is full the oldest snapshot is evicted.
    pub fn save(&mut self, originator: &impl Originator<T>) {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(originator.capture());
    }

    /// Pops the most recent snapshot and restores it on the originator.
    pub fn undo(&mut self, originator: &mut impl Originator<T>) -> Result<(), UndoError> {
        let snapshot = self.history.pop_back().ok_or(UndoError::EmptyHistory)?;
        originator.restore(snapshot);
        Ok(())
    }

    /// Returns whether at least one snapshot can be undone.
    pub fn has_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns the number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Caretaker, Memento, Originator, UndoError};

    struct Counter {
        value: i32,
    }

    impl Originator<i32> for Counter {
        fn capture(&self) -> Memento<i32> {
            Memento::new(self.value)
        }

        fn restore(&mut self, snapshot: Memento<i32>) {
            self.value = snapshot.into_value();
        }
    }

    #[test]
    fn undo_restores_states_in_reverse_order() {
        let mut counter = Counter { value: 0 };
        let mut caretaker = Caretaker::new();

        for next in 1..=3 {
            caretaker.save(&counter);
            counter.value = next;
        }

        caretaker.undo(&mut counter).unwrap();
        assert_eq!(counter.value, 2);
        caretaker.undo(&mut counter).unwrap();
        assert_eq!(counter.value, 1);
        caretaker.undo(&mut counter).unwrap();
        assert_eq!(counter.value, 0);
        assert!(!caretaker.has_undo());
    }

    #[test]
    fn undo_on_empty_history_is_a_checked_error() {
        let mut counter = Counter { value: 7 };
        let mut caretaker = Caretaker::<i32>::new();

        let err = caretaker.undo(&mut counter).unwrap_err();
        assert_eq!(err, UndoError::EmptyHistory);
        assert_eq!(counter.value, 7);
    }

    #[test]
    fn capacity_evicts_oldest_snapshot() {
        let mut counter = Counter { value: 0 };
        let mut caretaker = Caretaker::with_capacity(2);

        for next in 1..=3 {
            caretaker.save(&counter);
            counter.value = next;
        }
        assert_eq!(caretaker.len(), 2);

        caretaker.undo(&mut counter).unwrap();
        caretaker.undo(&mut counter).unwrap();
        // The snapshot of value 0 was evicted; the floor is 1.
        assert_eq!(counter.value, 1);
        assert!(caretaker.is_empty());
    }

    #[test]
    fn capture_then_restore_is_a_no_op() {
        let mut counter = Counter { value: 42 };
        let snapshot = counter.capture();
        counter.restore(snapshot);
        assert_eq!(counter.value, 42);
    }
}
