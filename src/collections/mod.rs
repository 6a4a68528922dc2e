//! Concurrency-safe containers.
//!
//! Collections are organized by data structure type:
//! - `heap`: binary heaps and the generic heap algorithms
//! - `priority_queue`: heaps with index-based mutation and swap hooks
//! - `hash`: maps, sets and map diffs
//! - `queue`: FIFO queues
//! - `buffer`: append/flush buffers, including a sharded one

pub mod buffer;
pub mod hash;
pub mod heap;
pub mod priority_queue;
pub mod queue;

// Re-export commonly used types from submodules
pub use buffer::{Buffer, LockedBuffer, MutexBuffer, RwLockBuffer, ShardedBuffer};
pub use hash::{
    calculate_map_diff, ConcurrentMap, ConcurrentSet, LockedMap, LockedSet, Map, MapDiff, MutexMap, MutexSet,
    RwLockMap, RwLockSet, Set,
};
pub use heap::{Heap, LockedHeap, MutexHeap, OnSwap, RwLockHeap};
pub use priority_queue::{
    CorePriorityQueue, HeapPriorityQueue, IndexedPriorityQueue, LockedPriorityQueue, PriorityQueue,
    RwLockPriorityQueue,
};
pub use queue::{LockedQueue, MutexQueue, Queue, RwLockQueue};
