//! `ConcurrentMap`: a sharded map built on [`dashmap`].
//!
//! Single-key operations lock only the shard owning the key. Whole-map reads
//! (`get_all`, `len`, the snapshot iterators) visit shards one at a time, so
//! they are consistent per shard but not across the map as a whole while
//! writers are active.

use super::map::Map;
use crate::compare::Equality;
use crate::iter::Snapshot;
use core::fmt;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::HashMap;
use std::hash::Hash;

/// A concurrency-safe map tuned for many independent keys.
pub struct ConcurrentMap<K, V> {
    entries: DashMap<K, V>,
    equality: Option<Equality<V>>,
}

impl<K: Eq + Hash, V> ConcurrentMap<K, V> {
    /// Creates an empty map without an equality function.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            equality: None,
        }
    }

    /// Creates an empty map that uses `equality` for compare-and-swap.
    pub fn with_equality(equality: Equality<V>) -> Self {
        Self {
            entries: DashMap::new(),
            equality: Some(equality),
        }
    }

    /// Moves the entries of `map` into a new concurrent map.
    pub fn from_map(map: HashMap<K, V>, equality: Option<Equality<V>>) -> Self {
        Self {
            entries: map.into_iter().collect(),
            equality,
        }
    }
}

impl<K: Eq + Hash, V> Default for ConcurrentMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for ConcurrentMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            equality: None,
        }
    }
}

impl<K, V> Map<K, V> for ConcurrentMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    fn delete(&self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&self) {
        self.entries.clear();
    }

    fn compare_and_swap(&self, key: &K, old: &V, new: V) -> bool {
        let Some(mut current) = self.entries.get_mut(key) else {
            return false;
        };
        let Some(equality) = &self.equality else {
            panic!("compare_and_swap called without an equality function");
        };
        if !equality.eq(current.value(), old) {
            return false;
        }
        *current.value_mut() = new;
        true
    }

    fn swap(&self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    fn load_or_store(&self, key: K, value: V) -> (V, bool) {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => (entry.get().clone(), true),
            Entry::Vacant(entry) => (entry.insert(value).value().clone(), false),
        }
    }

    fn load_and_delete(&self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|(_, value)| value)
    }

    fn get_all(&self) -> HashMap<K, V> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    fn get_many(&self, keys: &[K]) -> HashMap<K, V> {
        keys.iter()
            .filter_map(|key| self.get(key).map(|value| (key.clone(), value)))
            .collect()
    }

    fn set_many<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.entries.insert(key, value);
        }
    }

    fn all(&self) -> Snapshot<(K, V)> {
        Snapshot::new(
            self.entries
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().clone()))
                .collect(),
        )
    }

    fn keys(&self) -> Snapshot<K> {
        Snapshot::new(self.entries.iter().map(|entry| entry.key().clone()).collect())
    }

    fn values(&self) -> Snapshot<V> {
        Snapshot::new(self.entries.iter().map(|entry| entry.value().clone()).collect())
    }
}

impl<K: Eq + Hash, V> fmt::Debug for ConcurrentMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentMap")
            .field("len", &self.entries.len())
            .field("equality", &self.equality.is_some())
            .finish()
    }
}
