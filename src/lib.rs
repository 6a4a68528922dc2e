//! # `guarded` - Concurrency-Safe Containers
//!
//! Maps, sets, FIFO queues, append/flush buffers, binary heaps and priority
//! queues that any number of threads can share by reference. Every container
//! synchronizes internally, so all operations take `&self`.
//!
//! ## Locking strategies
//!
//! Most containers come in two flavours that differ only in the lock wrapped
//! around otherwise identical storage:
//!
//! - `Mutex*` types use one exclusive lock ([`Exclusive`]);
//! - `RwLock*` types use a reader/writer lock ([`ReadWrite`]), letting
//!   read-only operations run in parallel.
//!
//! Both produce identical results for identical single-threaded operation
//! sequences. Maps and sets additionally have a sharded `Concurrent*` variant
//! built on [`dashmap`], and [`ShardedBuffer`] spreads appends over several
//! independent buffers.
//!
//! ## Snapshots
//!
//! Whole-container reads (`to_vec`, `get_all`, `peek` on buffers, `all`,
//! `range`) copy the contents while holding the lock and release it before
//! caller code sees the copy. Visitors may therefore call back into the same
//! container. A [`Snapshot`] never reflects mutations made after it was
//! taken.
//!
//! ## Ordering
//!
//! Heaps and priority queues take a [`Less`] comparator: `less(a, b)` means
//! `a` leaves before `b`. [`MinFirst`] and [`MaxFirst`] cover `Ord` types and
//! any `Fn(&T, &T) -> bool` closure works too.
//!
//! ## Example
//!
//! ```rust
//! use guarded::{Heap, MinFirst, Queue, RwLockHeap, RwLockQueue};
//!
//! let heap = RwLockHeap::new(MinFirst);
//! heap.extend([3, 1, 2]);
//! assert_eq!(heap.pop(), Some(1));
//!
//! let queue = RwLockQueue::new();
//! queue.push("a");
//! queue.push("b");
//! assert_eq!(queue.pop(), Some("a"));
//! ```
//!
//! ## Swap notification
//!
//! Indexed priority queues accept an [`OnSwap`] hook so elements can track
//! the slot index that [`PriorityQueue::fix`], `remove_at` and `update_at`
//! expect:
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use guarded::{Heap, IndexedPriorityQueue, PriorityQueue};
//!
//! struct Job {
//!     priority: u32,
//!     slot: Arc<AtomicUsize>,
//! }
//!
//! let pq = IndexedPriorityQueue::new(|a: &Arc<Job>, b: &Arc<Job>| a.priority < b.priority)
//!     .with_on_swap(|i, j, jobs: &[Arc<Job>]| {
//!         jobs[i].slot.store(i, Ordering::Relaxed);
//!         jobs[j].slot.store(j, Ordering::Relaxed);
//!     });
//!
//! let urgent = Arc::new(Job { priority: 9, slot: Arc::new(AtomicUsize::new(0)) });
//! pq.push(Arc::new(Job { priority: 5, slot: Arc::new(AtomicUsize::new(0)) }));
//! urgent.slot.store(pq.len(), Ordering::Relaxed);
//! pq.push(Arc::clone(&urgent));
//!
//! let removed = pq.remove_at(urgent.slot.load(Ordering::Relaxed));
//! assert_eq!(removed.map(|job| job.priority), Some(9));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emits `tracing` events for queue compaction and sharded
//!   buffer construction and flushes.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod compare;
pub mod concurrency;
pub mod config;
pub mod iter;

pub use collections::{
    calculate_map_diff, Buffer, ConcurrentMap, ConcurrentSet, CorePriorityQueue, Heap, HeapPriorityQueue,
    IndexedPriorityQueue, LockedBuffer, LockedHeap, LockedMap, LockedPriorityQueue, LockedQueue, LockedSet, Map,
    MapDiff, MutexBuffer, MutexHeap, MutexMap, MutexQueue, MutexSet, OnSwap, PriorityQueue, Queue, RwLockBuffer,
    RwLockHeap, RwLockMap, RwLockPriorityQueue, RwLockQueue, RwLockSet, Set, ShardedBuffer,
};
pub use compare::{Equality, Less, MaxFirst, MinFirst};
pub use concurrency::{Exclusive, Guard, LockStrategy, ReadWrite};
pub use config::BufferConfig;
pub use iter::Snapshot;
