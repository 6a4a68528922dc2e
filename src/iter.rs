//! Snapshot iteration.
//!
//! Every `all`/`keys`/`values` method copies the container's contents while
//! holding its lock, releases the lock, and returns a [`Snapshot`] over the
//! copy. Consumers may therefore re-enter or mutate the container while
//! iterating; the traversal keeps seeing the state at the moment of the call.

use core::fmt;
use core::iter::FusedIterator;
use std::vec;

/// Owning iterator over a point-in-time copy of a container.
pub struct Snapshot<T> {
    items: vec::IntoIter<T>,
}

impl<T> Snapshot<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }

    /// Returns the items not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.items.next_back()
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

impl<T> FusedIterator for Snapshot<T> {}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Snapshot").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_yields_in_order_and_reports_size() {
        let mut snap = Snapshot::new(vec![1, 2, 3]);
        assert_eq!(snap.len(), 3);
        assert_eq!(snap.next(), Some(1));
        assert_eq!(snap.next_back(), Some(3));
        assert_eq!(snap.as_slice(), &[2]);
        assert_eq!(snap.collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn default_snapshot_is_empty() {
        assert_eq!(Snapshot::<u8>::default().count(), 0);
    }
}
