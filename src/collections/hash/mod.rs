//! Hash-based collections: maps, sets, and map diffs.
//!
//! Each container family has a trait ([`Map`], [`Set`]) and several
//! implementations that differ only in how they synchronize:
//!
//! - `Mutex*` / `RwLock*`: one `HashMap`/`HashSet` behind one lock, with
//!   per-instance consistent snapshots;
//! - `Concurrent*`: a sharded [`dashmap`] table, best for many independent
//!   keys; whole-container reads are consistent per shard only.

pub mod concurrent_map;
pub mod concurrent_set;
pub mod diff;
pub mod locked_map;
pub mod locked_set;
pub mod map;
pub mod set;

pub use concurrent_map::ConcurrentMap;
pub use concurrent_set::ConcurrentSet;
pub use diff::{calculate_map_diff, MapDiff};
pub use locked_map::{LockedMap, MutexMap, RwLockMap};
pub use locked_set::{LockedSet, MutexSet, RwLockSet};
pub use map::Map;
pub use set::Set;
