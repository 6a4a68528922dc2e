//! `ShardedBuffer`: several independent buffers fed round-robin.

use super::locked::RwLockBuffer;
use super::Buffer;
use crate::config::BufferConfig;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};
use crossbeam_utils::CachePadded;

/// A high-throughput buffer split into shards.
///
/// Each append picks the next shard from an atomic counter, so concurrent
/// producers mostly lock different shards. `flush`, `peek` and `len` walk the
/// shards in index order: the result preserves order within a shard, not
/// across shards, and a flush is atomic per shard rather than for the buffer
/// as a whole.
pub struct ShardedBuffer<T> {
    shards: Box<[CachePadded<RwLockBuffer<T>>]>,
    next: CachePadded<AtomicUsize>,
}

impl<T> ShardedBuffer<T> {
    /// Creates `shard_count` shards, each pre-sized for `initial_capacity`
    /// items. A `shard_count` of zero is coerced to one.
    pub fn new(shard_count: usize, initial_capacity: usize) -> Self {
        Self::from_config(&BufferConfig {
            initial_capacity,
            shard_count,
        })
    }

    /// Creates a buffer from `config`.
    pub fn from_config(config: &BufferConfig) -> Self {
        let shards = config.effective_shards();

        #[cfg(feature = "tracing")]
        {
            if shards != config.shard_count {
                tracing::debug!(requested = config.shard_count, shards, "coerced shard count");
            }
            tracing::debug!(shards, initial_capacity = config.initial_capacity, "building sharded buffer");
        }

        Self {
            shards: (0..shards)
                .map(|_| CachePadded::new(RwLockBuffer::new(config.initial_capacity)))
                .collect(),
            next: CachePadded::new(AtomicUsize::new(0)),
        }
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn next_shard(&self) -> &RwLockBuffer<T> {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.shards.len();
        &self.shards[index]
    }
}

impl<T> Default for ShardedBuffer<T> {
    fn default() -> Self {
        Self::from_config(&BufferConfig::default())
    }
}

impl<T: Clone> Buffer<T> for ShardedBuffer<T> {
    fn append(&self, item: T) {
        self.next_shard().append(item);
    }

    /// The whole batch lands in one shard.
    fn extend<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return;
        }
        self.next_shard().extend(items);
    }

    fn flush(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        for shard in self.shards.iter() {
            out.append(&mut shard.flush());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(items = out.len(), "flushed sharded buffer");

        out
    }

    fn peek(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        for shard in self.shards.iter() {
            out.append(&mut shard.peek());
        }
        out
    }

    fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.len()).sum()
    }
}

impl<T> fmt::Debug for ShardedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShardedBuffer")
            .field("shards", &self.shards.len())
            .field("shard", &self.shards.iter().map(|shard| &**shard).collect::<Vec<_>>())
            .finish()
    }
}
