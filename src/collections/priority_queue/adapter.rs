//! `HeapPriorityQueue`: a priority queue that keeps plain storage and drives
//! the generic [`algo`](crate::collections::heap::algo) functions through a
//! short-lived borrowed adapter.

use super::PriorityQueue;
use crate::collections::heap::algo::{self, HeapInterface};
use crate::collections::heap::{Heap, OnSwap};
use crate::compare::Less;
use core::fmt;
use parking_lot::RwLock;

struct Slots<T, C> {
    items: Vec<T>,
    cmp: C,
    on_swap: Option<OnSwap<T>>,
}

/// Borrowed view of [`Slots`] that the heap algorithms operate on. Built per
/// operation while the write lock is held.
struct HeapAdapter<'a, T, C> {
    items: &'a mut Vec<T>,
    cmp: &'a C,
    on_swap: Option<&'a OnSwap<T>>,
}

impl<T, C> Slots<T, C> {
    fn adapter(&mut self) -> HeapAdapter<'_, T, C> {
        HeapAdapter {
            items: &mut self.items,
            cmp: &self.cmp,
            on_swap: self.on_swap.as_ref(),
        }
    }
}

impl<T, C: Less<T>> HeapInterface for HeapAdapter<'_, T, C> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.cmp.less(&self.items[i], &self.items[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
        if let Some(hook) = self.on_swap {
            hook(i, j, self.items.as_slice());
        }
    }

    fn push_back(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }
}

/// Indexed priority queue over a reader/writer lock whose storage is a plain
/// `Vec`, maintained by the free functions in
/// [`algo`](crate::collections::heap::algo).
///
/// Behaves like [`RwLockPriorityQueue`](super::RwLockPriorityQueue); it exists
/// for callers that want to see the heap algorithms applied to ordinary
/// storage.
pub struct HeapPriorityQueue<T, C> {
    slots: RwLock<Slots<T, C>>,
}

impl<T, C: Less<T>> HeapPriorityQueue<T, C> {
    /// Creates an empty queue ordered by `less`.
    pub fn new(less: C) -> Self {
        Self::from_vec(Vec::new(), less)
    }

    /// Builds a queue from existing items in O(n).
    pub fn from_vec(items: Vec<T>, less: C) -> Self {
        let mut slots = Slots {
            items,
            cmp: less,
            on_swap: None,
        };
        algo::init(&mut slots.adapter());
        Self {
            slots: RwLock::new(slots),
        }
    }

    /// Attaches a swap hook. See [`OnSwap`] for its contract.
    #[must_use]
    pub fn with_on_swap<F>(mut self, hook: F) -> Self
    where
        F: Fn(usize, usize, &[T]) + Send + Sync + 'static,
    {
        self.slots.get_mut().on_swap = Some(Box::new(hook));
        self
    }

    fn apply<R>(&self, op: impl FnOnce(&mut HeapAdapter<'_, T, C>) -> R) -> R {
        let mut slots = self.slots.write();
        op(&mut slots.adapter())
    }
}

impl<T, C: Less<T> + Default> Default for HeapPriorityQueue<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: Clone, C: Less<T>> Heap<T> for HeapPriorityQueue<T, C> {
    fn push(&self, item: T) {
        self.apply(|heap| algo::push(heap, item));
    }

    fn extend<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return;
        }
        self.apply(|heap| items.for_each(|item| algo::push(heap, item)));
    }

    fn pop(&self) -> Option<T> {
        self.apply(|heap| algo::pop(heap))
    }

    fn peek(&self) -> Option<T> {
        self.slots.read().items.first().cloned()
    }

    fn len(&self) -> usize {
        self.slots.read().items.len()
    }

    fn clear(&self) {
        self.slots.write().items = Vec::new();
    }

    fn to_vec(&self) -> Vec<T> {
        self.slots.read().items.clone()
    }
}

impl<T: Clone, C: Less<T>> PriorityQueue<T> for HeapPriorityQueue<T, C> {
    fn fix(&self, index: usize) {
        self.apply(|heap| algo::fix(heap, index));
    }

    fn remove_at(&self, index: usize) -> Option<T> {
        self.apply(|heap| algo::remove(heap, index))
    }

    fn update_at(&self, index: usize, item: T) -> bool {
        self.apply(|heap| match heap.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                algo::fix(heap, index);
                true
            }
            None => false,
        })
    }
}

impl<T, C> fmt::Debug for HeapPriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.read();
        f.debug_struct("HeapPriorityQueue")
            .field("len", &slots.items.len())
            .field("on_swap", &slots.on_swap.is_some())
            .finish()
    }
}
