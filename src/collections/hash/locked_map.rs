//! `LockedMap`: a `HashMap` behind a single lock.

use super::map::Map;
use crate::compare::Equality;
use crate::concurrency::{Exclusive, Guard, LockStrategy, ReadWrite};
use crate::iter::Snapshot;
use core::fmt;
use std::collections::HashMap;
use std::hash::Hash;

/// A hash map protected by the lock of strategy `S`.
///
/// Use the [`MutexMap`] or [`RwLockMap`] aliases.
pub struct LockedMap<K, V, S: LockStrategy> {
    entries: S::Lock<HashMap<K, V>>,
    equality: Option<Equality<V>>,
}

/// Map behind a mutex.
pub type MutexMap<K, V> = LockedMap<K, V, Exclusive>;

/// Map behind a reader/writer lock.
pub type RwLockMap<K, V> = LockedMap<K, V, ReadWrite>;

impl<K, V, S: LockStrategy> LockedMap<K, V, S> {
    /// Creates an empty map without an equality function. Allocates nothing.
    pub fn new() -> Self {
        Self::from_map(HashMap::new(), None)
    }

    /// Creates an empty map that uses `equality` for compare-and-swap.
    pub fn with_equality(equality: Equality<V>) -> Self {
        Self::from_map(HashMap::new(), Some(equality))
    }

    /// Wraps an existing map.
    pub fn from_map(map: HashMap<K, V>, equality: Option<Equality<V>>) -> Self {
        Self {
            entries: Guard::new(map),
            equality,
        }
    }
}

impl<K, V, S: LockStrategy> Default for LockedMap<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V, S: LockStrategy> FromIterator<(K, V)> for LockedMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect(), None)
    }
}

impl<K, V, S> Map<K, V> for LockedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: LockStrategy,
{
    fn get(&self, key: &K) -> Option<V> {
        self.entries.read(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: K, value: V) {
        self.entries.write(|entries| {
            entries.insert(key, value);
        });
    }

    fn delete(&self, key: &K) -> bool {
        self.entries.write(|entries| entries.remove(key).is_some())
    }

    fn len(&self) -> usize {
        self.entries.read(HashMap::len)
    }

    fn clear(&self) {
        self.entries.write(|entries| *entries = HashMap::new());
    }

    fn compare_and_swap(&self, key: &K, old: &V, new: V) -> bool {
        self.entries.write(|entries| {
            let Some(current) = entries.get_mut(key) else {
                return false;
            };
            let Some(equality) = &self.equality else {
                panic!("compare_and_swap called without an equality function");
            };
            if !equality.eq(current, old) {
                return false;
            }
            *current = new;
            true
        })
    }

    fn swap(&self, key: K, value: V) -> Option<V> {
        self.entries.write(|entries| entries.insert(key, value))
    }

    fn load_or_store(&self, key: K, value: V) -> (V, bool) {
        self.entries.write(|entries| match entries.get(&key) {
            Some(existing) => (existing.clone(), true),
            None => {
                entries.insert(key, value.clone());
                (value, false)
            }
        })
    }

    fn load_and_delete(&self, key: &K) -> Option<V> {
        self.entries.write(|entries| entries.remove(key))
    }

    fn get_all(&self) -> HashMap<K, V> {
        self.entries.read(HashMap::clone)
    }

    fn get_many(&self, keys: &[K]) -> HashMap<K, V> {
        self.entries.read(|entries| {
            keys.iter()
                .filter_map(|key| entries.get(key).map(|value| (key.clone(), value.clone())))
                .collect()
        })
    }

    fn set_many<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            return;
        }
        self.entries.write(|map| map.extend(entries));
    }

    fn all(&self) -> Snapshot<(K, V)> {
        Snapshot::new(self.entries.read(|entries| {
            entries.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
        }))
    }

    fn keys(&self) -> Snapshot<K> {
        Snapshot::new(self.entries.read(|entries| entries.keys().cloned().collect()))
    }

    fn values(&self) -> Snapshot<V> {
        Snapshot::new(self.entries.read(|entries| entries.values().cloned().collect()))
    }
}

impl<K, V, S: LockStrategy> fmt::Debug for LockedMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.entries.read(HashMap::len);
        f.debug_struct("LockedMap")
            .field("strategy", &S::NAME)
            .field("len", &len)
            .field("equality", &self.equality.is_some())
            .finish()
    }
}
