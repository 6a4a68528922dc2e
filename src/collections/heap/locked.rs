//! `LockedHeap`: a heap engine behind a single lock.

use super::engine::HeapCore;
use super::Heap;
use crate::compare::Less;
use crate::concurrency::{Exclusive, Guard, LockStrategy, ReadWrite};
use core::fmt;

/// A binary heap protected by the lock of strategy `S`.
///
/// Use the [`RwLockHeap`] or [`MutexHeap`] aliases rather than naming `S`.
pub struct LockedHeap<T, C, S: LockStrategy> {
    core: S::Lock<HeapCore<T, C>>,
}

/// Heap behind a reader/writer lock; `peek`, `len` and snapshots share the
/// lock.
pub type RwLockHeap<T, C> = LockedHeap<T, C, ReadWrite>;

/// Heap behind a mutex.
pub type MutexHeap<T, C> = LockedHeap<T, C, Exclusive>;

impl<T, C: Less<T>, S: LockStrategy> LockedHeap<T, C, S> {
    /// Creates an empty heap ordered by `less`.
    pub fn new(less: C) -> Self {
        Self {
            core: Guard::new(HeapCore::new(less)),
        }
    }

    /// Builds a heap from existing items in O(n).
    pub fn from_vec(items: Vec<T>, less: C) -> Self {
        Self {
            core: Guard::new(HeapCore::from_vec(items, less)),
        }
    }
}

impl<T, C, S: LockStrategy> LockedHeap<T, C, S> {
    /// Runs `f` on the engine under the write lock.
    pub(crate) fn write_core<R>(&self, f: impl FnOnce(&mut HeapCore<T, C>) -> R) -> R {
        self.core.write(f)
    }

    pub(crate) fn core_mut(&mut self) -> &mut HeapCore<T, C> {
        self.core.get_mut()
    }
}

impl<T, C: Less<T> + Default, S: LockStrategy> Default for LockedHeap<T, C, S> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: Clone, C: Less<T>, S: LockStrategy> Heap<T> for LockedHeap<T, C, S> {
    fn push(&self, item: T) {
        self.core.write(|core| core.push(item));
    }

    fn extend<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return;
        }
        self.core.write(|core| items.for_each(|item| core.push(item)));
    }

    fn pop(&self) -> Option<T> {
        self.core.write(HeapCore::pop)
    }

    fn peek(&self) -> Option<T> {
        self.core.read(|core| core.peek().cloned())
    }

    fn len(&self) -> usize {
        self.core.read(HeapCore::len)
    }

    fn clear(&self) {
        self.core.write(HeapCore::clear);
    }

    fn to_vec(&self) -> Vec<T> {
        self.core.read(|core| core.as_slice().to_vec())
    }
}

impl<T, C, S: LockStrategy> fmt::Debug for LockedHeap<T, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.core.read(|core| {
            f.debug_struct("LockedHeap")
                .field("strategy", &S::NAME)
                .field("len", &core.as_slice().len())
                .finish()
        })
    }
}
