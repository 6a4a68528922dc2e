//! `HeapCore`: the array-backed binary heap every heap container locks.
//!
//! The core owns its storage, its comparator and the optional swap hook. It
//! is not synchronized; containers wrap it in a lock chosen by their
//! [`LockStrategy`](crate::concurrency::LockStrategy).

use super::algo::{self, HeapInterface};
use super::OnSwap;
use crate::compare::Less;
use core::fmt;

pub(crate) struct HeapCore<T, C> {
    items: Vec<T>,
    cmp: C,
    on_swap: Option<OnSwap<T>>,
}

impl<T, C: Less<T>> HeapCore<T, C> {
    pub(crate) fn new(cmp: C) -> Self {
        Self {
            items: Vec::new(),
            cmp,
            on_swap: None,
        }
    }

    /// Takes ownership of `items` and heapifies them in O(n).
    pub(crate) fn from_vec(items: Vec<T>, cmp: C) -> Self {
        let mut core = Self {
            items,
            cmp,
            on_swap: None,
        };
        algo::init(&mut core);
        core
    }

    pub(crate) fn push(&mut self, item: T) {
        algo::push(self, item);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        algo::pop(self)
    }

    pub(crate) fn fix(&mut self, index: usize) {
        algo::fix(self, index);
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Option<T> {
        algo::remove(self, index)
    }

    pub(crate) fn update_at(&mut self, index: usize, item: T) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                algo::fix(self, index);
                true
            }
            None => false,
        }
    }
}

impl<T, C> HeapCore<T, C> {
    pub(crate) fn set_on_swap(&mut self, hook: OnSwap<T>) {
        self.on_swap = Some(hook);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Drops every element and releases the backing allocation.
    pub(crate) fn clear(&mut self) {
        self.items = Vec::new();
    }
}

impl<T, C: Less<T>> HeapInterface for HeapCore<T, C> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.cmp.less(&self.items[i], &self.items[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
        if let Some(hook) = &self.on_swap {
            hook(i, j, &self.items);
        }
    }

    #[inline]
    fn push_back(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }
}

impl<T, C> fmt::Debug for HeapCore<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapCore")
            .field("len", &self.items.len())
            .field("on_swap", &self.on_swap.is_some())
            .finish()
    }
}
