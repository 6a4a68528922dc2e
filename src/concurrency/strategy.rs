//! The [`Guard`] lock abstraction and the strategies that pick a lock type.

use parking_lot::{Mutex, RwLock};

/// A lock guarding a single value, accessed through closures.
///
/// Closure-scoped access keeps the guard from escaping the container, which is
/// what lets snapshot operations copy under the lock and hand the copy to
/// caller code only after the lock is released.
pub trait Guard<T> {
    /// Wraps `value` in a new unlocked lock.
    fn new(value: T) -> Self;

    /// Runs `f` with shared access. May run concurrently with other readers
    /// depending on the strategy.
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Runs `f` with exclusive access.
    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    /// Returns a mutable reference without locking; `&mut self` proves
    /// exclusivity.
    fn get_mut(&mut self) -> &mut T;
}

impl<T> Guard<T> for Mutex<T> {
    #[inline]
    fn new(value: T) -> Self {
        Mutex::new(value)
    }

    #[inline]
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock())
    }

    #[inline]
    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.lock())
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T {
        Mutex::get_mut(self)
    }
}

impl<T> Guard<T> for RwLock<T> {
    #[inline]
    fn new(value: T) -> Self {
        RwLock::new(value)
    }

    #[inline]
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.read())
    }

    #[inline]
    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.write())
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T {
        RwLock::get_mut(self)
    }
}

/// Selects the lock type a container wraps its storage in.
pub trait LockStrategy: 'static {
    /// The lock used for storage of type `T`.
    type Lock<T>: Guard<T>;

    /// Human-readable strategy name, used in `Debug` output.
    const NAME: &'static str;
}

/// A single mutual-exclusion lock guards all reads and writes.
#[derive(Debug, Clone, Copy)]
pub enum Exclusive {}

impl LockStrategy for Exclusive {
    type Lock<T> = Mutex<T>;
    const NAME: &'static str = "mutex";
}

/// A reader/writer lock: parallel reads, exclusive writes.
#[derive(Debug, Clone, Copy)]
pub enum ReadWrite {}

impl LockStrategy for ReadWrite {
    type Lock<T> = RwLock<T>;
    const NAME: &'static str = "rwlock";
}
