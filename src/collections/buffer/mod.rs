//! Append-only buffers drained in bulk.
//!
//! A buffer collects items from any number of producers; a consumer takes
//! everything at once with [`Buffer::flush`], which swaps in fresh storage
//! atomically (per shard for [`ShardedBuffer`]).

pub mod locked;
pub mod sharded;

pub use locked::{LockedBuffer, MutexBuffer, RwLockBuffer};
pub use sharded::ShardedBuffer;

use crate::iter::Snapshot;

/// A concurrency-safe append/flush buffer.
pub trait Buffer<T> {
    /// Appends one item.
    fn append(&self, item: T);

    /// Appends every item under a single lock acquisition, keeping them
    /// contiguous. Empty input does not touch the lock.
    fn extend<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized;

    /// Takes the current contents and leaves the buffer empty.
    fn flush(&self) -> Vec<T>;

    /// Copies the current contents without clearing.
    fn peek(&self) -> Vec<T>;

    /// Number of buffered items.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is buffered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates a snapshot of the contents in append order.
    fn all(&self) -> Snapshot<T> {
        Snapshot::new(self.peek())
    }
}
