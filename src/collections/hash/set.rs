//! The shared set contract.

use crate::iter::Snapshot;

/// A concurrency-safe set.
pub trait Set<T> {
    /// Inserts `item`. Returns `true` if it was not already present.
    fn add(&self, item: T) -> bool;

    /// Removes `item`. Returns `true` if it was present.
    fn delete(&self, item: &T) -> bool;

    /// Returns `true` if `item` is present.
    fn has(&self, item: &T) -> bool;

    /// Number of members.
    fn len(&self) -> usize;

    /// Returns `true` if the set has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every member.
    fn clear(&self);

    /// Copies the members in unspecified order.
    fn to_vec(&self) -> Vec<T>;

    /// Visits a snapshot of the members until `visit` returns `false`.
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

    /// Iterates a snapshot of the members.
    fn all(&self) -> Snapshot<T> {
        Snapshot::new(self.to_vec())
    }
}
