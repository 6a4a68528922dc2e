//! The shared map contract.

use crate::iter::Snapshot;
use std::collections::HashMap;
use std::hash::Hash;

/// A concurrency-safe key/value map.
///
/// All methods take `&self`. Batch reads and snapshot iterators copy the
/// entries under the lock and release it before returning, so callers may
/// freely re-enter the map while consuming them.
pub trait Map<K, V> {
    /// Returns a copy of the value stored for `key`.
    fn get(&self, key: &K) -> Option<V>;

    /// Inserts or overwrites the value for `key`.
    fn set(&self, key: K, value: V);

    /// Removes `key`. Returns `true` if it was present.
    fn delete(&self, key: &K) -> bool;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    fn clear(&self);

    /// Atomically replaces the value for `key` with `new` if the stored value
    /// equals `old` under the map's [`Equality`](crate::Equality).
    ///
    /// Returns `false` if `key` is absent or the stored value differs.
    ///
    /// # Panics
    ///
    /// Panics if `key` is present and the map was built without an equality
    /// function.
    fn compare_and_swap(&self, key: &K, old: &V, new: V) -> bool;

    /// Stores `value` for `key`, returning the previous value if there was one.
    fn swap(&self, key: K, value: V) -> Option<V>;

    /// Returns the existing value for `key` and `true`, or stores `value` and
    /// returns it with `false`.
    fn load_or_store(&self, key: K, value: V) -> (V, bool);

    /// Removes `key` and returns the value it held.
    fn load_and_delete(&self, key: &K) -> Option<V>;

    /// Copies every entry.
    fn get_all(&self) -> HashMap<K, V>;

    /// Copies the entries for the requested keys that are present.
    fn get_many(&self, keys: &[K]) -> HashMap<K, V>;

    /// Inserts every entry under a single lock acquisition where the
    /// implementation allows it.
    fn set_many<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        Self: Sized;

    /// Snapshot comparison: both maps hold the same keys and `eq` accepts
    /// every pair of values. A map always equals itself.
    fn equals<M>(&self, other: &M, eq: impl Fn(&V, &V) -> bool) -> bool
    where
        M: Map<K, V> + ?Sized,
        K: Eq + Hash,
        Self: Sized,
    {
        if std::ptr::addr_eq(self, other) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }
        let mine = self.get_all();
        let theirs = other.get_all();
        mine.len() == theirs.len()
            && mine
                .iter()
                .all(|(key, value)| theirs.get(key).is_some_and(|other| eq(value, other)))
    }

    /// Visits a snapshot of the entries until `visit` returns `false`. Order
    /// is unspecified.
    fn range<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V) -> bool,
        Self: Sized,
    {
        for (key, value) in self.all() {
            if !visit(&key, &value) {
                break;
            }
        }
    }

    /// Iterates a snapshot of the entries.
    fn all(&self) -> Snapshot<(K, V)>;

    /// Iterates a snapshot of the keys.
    fn keys(&self) -> Snapshot<K>;

    /// Iterates a snapshot of the values.
    fn values(&self) -> Snapshot<V>;
}
