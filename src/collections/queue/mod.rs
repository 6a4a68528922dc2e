//! FIFO queues.
//!
//! Storage is a growable array plus a head index: `pop` advances the head
//! instead of shifting, and the consumed prefix is reclaimed periodically.

pub(crate) mod engine;
pub mod locked;

pub use locked::{LockedQueue, MutexQueue, RwLockQueue};

use crate::iter::Snapshot;

/// A concurrency-safe first-in first-out queue.
pub trait Queue<T> {
    /// Appends `item` at the back.
    fn push(&self, item: T);

    /// Appends every item, in order, under a single lock acquisition. Empty
    /// input does not touch the lock.
    fn extend<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized;

    /// Removes and returns the front item.
    fn pop(&self) -> Option<T>;

    /// Returns a copy of the front item.
    fn peek(&self) -> Option<T>;

    /// Number of queued items.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every item and releases the backing array.
    fn clear(&self);

    /// Copies the items front to back.
    fn to_vec(&self) -> Vec<T>;

    /// Visits a snapshot of the items front to back until `visit` returns
    /// `false`.
    fn range<F>(&self, mut visit: F)
    where
        F: FnMut(&T) -> bool,
        Self: Sized,
    {
        for item in self.to_vec() {
            if !visit(&item) {
                break;
            }
        }
    }

    /// Iterates a snapshot of the items front to back.
    fn all(&self) -> Snapshot<T> {
        Snapshot::new(self.to_vec())
    }
}
