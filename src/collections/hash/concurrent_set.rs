//! `ConcurrentSet`: a sharded set built on [`dashmap::DashSet`].

use super::set::Set;
use core::fmt;
use dashmap::DashSet;
use std::hash::Hash;

/// A concurrency-safe set that locks one shard per operation.
///
/// `len` and snapshots visit shards in turn and are not atomic across the
/// whole set while writers are active.
pub struct ConcurrentSet<T> {
    items: DashSet<T>,
}

impl<T: Eq + Hash> ConcurrentSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            items: DashSet::new(),
        }
    }
}

impl<T: Eq + Hash> Default for ConcurrentSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for ConcurrentSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash + Clone> Set<T> for ConcurrentSet<T> {
    fn add(&self, item: T) -> bool {
        self.items.insert(item)
    }

    fn delete(&self, item: &T) -> bool {
        self.items.remove(item).is_some()
    }

    fn has(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&self) {
        self.items.clear();
    }

    fn to_vec(&self) -> Vec<T> {
        self.items.iter().map(|item| item.key().clone()).collect()
    }
}

impl<T: Eq + Hash> fmt::Debug for ConcurrentSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentSet").field("len", &self.items.len()).finish()
    }
}
