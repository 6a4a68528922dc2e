//! Priority queues with index-based mutation and swap notification.
//!
//! Every queue here is a min-heap under its comparator: `pop` returns the item
//! no other item is [`less`](crate::Less) than.
//!
//! | type | lock | indexed ops | swap hook |
//! |------|------|-------------|-----------|
//! | [`CorePriorityQueue`] | reader/writer | no | no |
//! | [`IndexedPriorityQueue`] | mutex | yes | yes |
//! | [`RwLockPriorityQueue`] | reader/writer | yes | yes |
//! | [`HeapPriorityQueue`] | reader/writer | yes | yes |
//!
//! # Index stability
//!
//! An index refers to a slot of the internal array and is only meaningful
//! until the next mutating call: any push, pop, fix or removal may relocate
//! arbitrary elements. Either read indices fresh (for example from
//! [`Heap::to_vec`]) or keep them current with a swap hook.
//!
//! # Mutating queued elements
//!
//! If the ordering-relevant part of a queued element changes, call
//! [`PriorityQueue::fix`] (or replace it with [`PriorityQueue::update_at`]).
//! Skipping this leaves later pops in an unspecified but memory-safe order.

pub mod adapter;
pub mod locked;

pub use adapter::HeapPriorityQueue;
pub use locked::{IndexedPriorityQueue, LockedPriorityQueue, RwLockPriorityQueue};

use crate::collections::heap::{Heap, RwLockHeap};

/// Minimal priority queue: the core [`Heap`] operations only, behind a
/// reader/writer lock, without a swap hook.
pub type CorePriorityQueue<T, C> = RwLockHeap<T, C>;

/// A priority queue that can repair, replace and remove elements by index.
pub trait PriorityQueue<T>: Heap<T> {
    /// Restores ordering after the element at `index` changed priority.
    /// Out-of-bounds indices are ignored. O(log n).
    fn fix(&self, index: usize);

    /// Removes and returns the element at `index`, which need not be the top.
    /// Returns `None` if `index` is out of bounds. O(log n).
    fn remove_at(&self, index: usize) -> Option<T>;

    /// Replaces the element at `index` with `item` and restores ordering.
    /// Returns `false`, leaving the queue untouched, if `index` is out of
    /// bounds. O(log n).
    fn update_at(&self, index: usize, item: T) -> bool;
}
