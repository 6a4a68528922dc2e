//! Locking strategies shared by every lock-backed container.
//!
//! A container is written once against [`LockStrategy`] and instantiated per
//! strategy through a type alias (`MutexMap`, `RwLockMap`, ...). Swapping the
//! alias swaps the concurrency behaviour without touching call sites:
//!
//! - [`Exclusive`]: one `parking_lot::Mutex`; reads and writes serialize.
//! - [`ReadWrite`]: one `parking_lot::RwLock`; reads run in parallel.
//!
//! The native concurrent-map strategy is not expressed here because it replaces
//! the storage itself; see `ConcurrentMap` and `ConcurrentSet`.

pub mod strategy;

pub use strategy::{Exclusive, Guard, LockStrategy, ReadWrite};
