//! `LockedPriorityQueue`: a locked heap extended with indexed operations.

use super::PriorityQueue;
use crate::collections::heap::{Heap, LockedHeap};
use crate::compare::Less;
use crate::concurrency::{Exclusive, LockStrategy, ReadWrite};
use core::fmt;

/// An indexed priority queue protected by the lock of strategy `S`.
///
/// Plain heap operations go through the wrapped [`LockedHeap`]; the indexed
/// ones take the same lock.
///
/// Use the [`IndexedPriorityQueue`] or [`RwLockPriorityQueue`] aliases.
pub struct LockedPriorityQueue<T, C, S: LockStrategy> {
    heap: LockedHeap<T, C, S>,
}

/// Indexed priority queue behind a mutex.
pub type IndexedPriorityQueue<T, C> = LockedPriorityQueue<T, C, Exclusive>;

/// Indexed priority queue behind a reader/writer lock.
pub type RwLockPriorityQueue<T, C> = LockedPriorityQueue<T, C, ReadWrite>;

impl<T, C: Less<T>, S: LockStrategy> LockedPriorityQueue<T, C, S> {
    /// Creates an empty queue ordered by `less`.
    pub fn new(less: C) -> Self {
        Self {
            heap: LockedHeap::new(less),
        }
    }

    /// Builds a queue from existing items in O(n). The hook, if attached
    /// later, does not observe this initial arrangement.
    pub fn from_vec(items: Vec<T>, less: C) -> Self {
        Self {
            heap: LockedHeap::from_vec(items, less),
        }
    }

    /// Attaches a swap hook. See [`OnSwap`](crate::OnSwap) for its contract.
    #[must_use]
    pub fn with_on_swap<F>(mut self, hook: F) -> Self
    where
        F: Fn(usize, usize, &[T]) + Send + Sync + 'static,
    {
        self.heap.core_mut().set_on_swap(Box::new(hook));
        self
    }
}

impl<T, C: Less<T> + Default, S: LockStrategy> Default for LockedPriorityQueue<T, C, S> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: Clone, C: Less<T>, S: LockStrategy> Heap<T> for LockedPriorityQueue<T, C, S> {
    fn push(&self, item: T) {
        self.heap.push(item);
    }

    fn extend<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.heap.extend(items);
    }

    fn pop(&self) -> Option<T> {
        self.heap.pop()
    }

    fn peek(&self) -> Option<T> {
        self.heap.peek()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&self) {
        self.heap.clear();
    }

    fn to_vec(&self) -> Vec<T> {
        self.heap.to_vec()
    }
}

impl<T: Clone, C: Less<T>, S: LockStrategy> PriorityQueue<T> for LockedPriorityQueue<T, C, S> {
    fn fix(&self, index: usize) {
        self.heap.write_core(|core| core.fix(index));
    }

    fn remove_at(&self, index: usize) -> Option<T> {
        self.heap.write_core(|core| core.remove_at(index))
    }

    fn update_at(&self, index: usize, item: T) -> bool {
        self.heap.write_core(|core| core.update_at(index, item))
    }
}

impl<T, C, S: LockStrategy> fmt::Debug for LockedPriorityQueue<T, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockedPriorityQueue").field("heap", &self.heap).finish()
    }
}
