//! Binary heaps ordered by a caller-supplied comparator.
//!
//! [`Heap`] is the contract shared by every heap-shaped container in the
//! crate, including the priority queues. The storage is a dense array kept in
//! heap order by the generic algorithms in [`algo`].

pub mod algo;
pub(crate) mod engine;
pub mod locked;

pub use locked::{LockedHeap, MutexHeap, RwLockHeap};

use crate::iter::Snapshot;

/// Swap-notification hook.
///
/// Called synchronously, under the container's write lock, every time two
/// storage slots exchange contents. Receives both indices and a read-only view
/// of the live storage, already swapped. The hook must not block, must not
/// call back into the same container (the write lock is held), and must not
/// retain the slice. Elements that track their own position typically keep an
/// `AtomicUsize` behind an `Arc` and store `i`/`j` into it here.
pub type OnSwap<T> = Box<dyn Fn(usize, usize, &[T]) + Send + Sync>;

/// A concurrency-safe binary heap.
///
/// The top element is the one no other element is [`less`](crate::Less) than.
/// All methods take `&self`; implementations synchronize internally.
pub trait Heap<T> {
    /// Inserts one item. O(log n).
    fn push(&self, item: T);

    /// Inserts every item under a single lock acquisition. Empty input does
    /// not touch the lock.
    fn extend<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized;

    /// Removes and returns the top item.
    fn pop(&self) -> Option<T>;

    /// Returns a copy of the top item without removing it.
    fn peek(&self) -> Option<T>;

    /// Number of stored items.
    fn len(&self) -> usize;

    /// Returns `true` if the heap holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every item and releases the backing array.
    fn clear(&self);

    /// Copies the items in internal array order (not sorted).
    fn to_vec(&self) -> Vec<T>;

    /// Visits a snapshot of the items in internal array order until `visit`
    /// returns `false`. The lock is not held while `visit` runs.
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

    /// Iterates a snapshot of the items in internal array order.
    fn all(&self) -> Snapshot<T> {
        Snapshot::new(self.to_vec())
    }
}
