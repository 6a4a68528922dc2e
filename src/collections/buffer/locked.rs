//! `LockedBuffer`: a `Vec` behind a single lock.

use super::Buffer;
use crate::concurrency::{Exclusive, Guard, LockStrategy, ReadWrite};
use crate::config::BufferConfig;
use core::{fmt, mem};

/// An append/flush buffer protected by the lock of strategy `S`.
///
/// Use the [`MutexBuffer`] or [`RwLockBuffer`] aliases.
pub struct LockedBuffer<T, S: LockStrategy> {
    items: S::Lock<Vec<T>>,
}

/// Buffer behind a mutex.
pub type MutexBuffer<T> = LockedBuffer<T, Exclusive>;

/// Buffer behind a reader/writer lock; `peek` and `len` share the lock.
pub type RwLockBuffer<T> = LockedBuffer<T, ReadWrite>;

impl<T, S: LockStrategy> LockedBuffer<T, S> {
    /// Creates an empty buffer with room for `initial_capacity` items.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            items: Guard::new(Vec::with_capacity(initial_capacity)),
        }
    }

    /// Creates an empty buffer sized by `config.initial_capacity`.
    pub fn from_config(config: &BufferConfig) -> Self {
        Self::new(config.initial_capacity)
    }
}

impl<T, S: LockStrategy> Default for LockedBuffer<T, S> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T, S: LockStrategy> From<Vec<T>> for LockedBuffer<T, S> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Guard::new(items),
        }
    }
}

impl<T: Clone, S: LockStrategy> Buffer<T> for LockedBuffer<T, S> {
    fn append(&self, item: T) {
        self.items.write(|items| items.push(item));
    }

    fn extend<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut incoming = items.into_iter().peekable();
        if incoming.peek().is_none() {
            return;
        }
        self.items.write(|items| items.extend(incoming));
    }

    /// The replacement storage keeps the capacity the flushed contents had.
    fn flush(&self) -> Vec<T> {
        self.items.write(|items| {
            let capacity = items.capacity();
            mem::replace(items, Vec::with_capacity(capacity))
        })
    }

    fn peek(&self) -> Vec<T> {
        self.items.read(|items| items.clone())
    }

    fn len(&self) -> usize {
        self.items.read(Vec::len)
    }
}

impl<T, S: LockStrategy> fmt::Debug for LockedBuffer<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.items.read(Vec::len);
        f.debug_struct("LockedBuffer").field("strategy", &S::NAME).field("len", &len).finish()
    }
}
