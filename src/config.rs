//! Construction parameters for buffer containers.

use serde::{Deserialize, Serialize};

/// Sizing for [`MutexBuffer`](crate::MutexBuffer),
/// [`RwLockBuffer`](crate::RwLockBuffer) and
/// [`ShardedBuffer`](crate::ShardedBuffer).
///
/// Missing fields deserialize to their defaults, so a partial document such
/// as `{"shard_count": 8}` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Pre-allocation hint per buffer (per shard for the sharded buffer).
    pub initial_capacity: usize,
    /// Number of independent partitions. Only the sharded buffer reads it;
    /// values below one are coerced to one.
    pub shard_count: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            shard_count: 1,
        }
    }
}

impl BufferConfig {
    /// Sets the pre-allocation hint.
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the number of shards.
    #[must_use]
    pub fn shard_count(mut self, shards: usize) -> Self {
        self.shard_count = shards;
        self
    }

    /// Shard count after coercion to at least one.
    pub fn effective_shards(&self) -> usize {
        self.shard_count.max(1)
    }
}
