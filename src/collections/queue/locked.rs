//! `LockedQueue`: head-indexed FIFO storage behind a single lock.

use super::engine::QueueCore;
use super::Queue;
use crate::concurrency::{Exclusive, Guard, LockStrategy, ReadWrite};
use core::fmt;

/// A FIFO queue protected by the lock of strategy `S`.
///
/// Use the [`RwLockQueue`] or [`MutexQueue`] aliases. A default instance is
/// ready for use and allocates nothing until the first push.
pub struct LockedQueue<T, S: LockStrategy> {
    core: S::Lock<QueueCore<T>>,
}

/// Queue behind a reader/writer lock.
pub type RwLockQueue<T> = LockedQueue<T, ReadWrite>;

/// Queue behind a mutex.
pub type MutexQueue<T> = LockedQueue<T, Exclusive>;

impl<T, S: LockStrategy> LockedQueue<T, S> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            core: Guard::new(QueueCore::new()),
        }
    }
}

impl<T, S: LockStrategy> Default for LockedQueue<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: LockStrategy> FromIterator<T> for LockedQueue<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            core: Guard::new(QueueCore::from_vec(iter.into_iter().collect())),
        }
    }
}

impl<T: Clone, S: LockStrategy> Queue<T> for LockedQueue<T, S> {
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
        self.core.write(QueueCore::pop)
    }

    fn peek(&self) -> Option<T> {
        self.core.read(|core| core.peek().cloned())
    }

    fn len(&self) -> usize {
        self.core.read(QueueCore::len)
    }

    fn clear(&self) {
        self.core.write(QueueCore::clear);
    }

    fn to_vec(&self) -> Vec<T> {
        self.core.read(|core| core.iter().cloned().collect())
    }
}

impl<T, S: LockStrategy> fmt::Debug for LockedQueue<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.core.read(QueueCore::len);
        f.debug_struct("LockedQueue").field("strategy", &S::NAME).field("len", &len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        let queue = RwLockQueue::new();
        assert_eq!(queue.len(), 0);
        queue.extend(["first", "second"]);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.peek(), Some("first"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some("first"));
        assert_eq!(queue.pop(), Some("second"));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn default_is_ready() {
        let queue: MutexQueue<u64> = MutexQueue::default();
        assert!(queue.is_empty());
        assert!(queue.to_vec().is_empty());
        queue.push(3);
        assert_eq!(queue.pop(), Some(3));
    }

    #[test]
    fn snapshot_is_front_to_back() {
        let queue: RwLockQueue<_> = (1..=5).collect();
        queue.pop();
        queue.push(6);
        assert_eq!(queue.to_vec(), vec![2, 3, 4, 5, 6]);
        assert_eq!(queue.all().rev().next(), Some(6));
    }

    #[test]
    fn range_may_push_while_visiting() {
        let queue: MutexQueue<_> = (0..3).collect();
        let mut visited = Vec::new();
        queue.range(|&x| {
            queue.push(x + 10);
            visited.push(x);
            true
        });
        assert_eq!(visited, vec![0, 1, 2]);
        assert_eq!(queue.to_vec(), vec![0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn clear_twice() {
        let queue: RwLockQueue<_> = (0..10).collect();
        queue.clear();
        queue.clear();
        assert_eq!(queue.len(), 0);
        assert!(format!("{queue:?}").contains("len: 0"));
    }
}
