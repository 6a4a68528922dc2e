//! Differences between two plain maps.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Result of [`calculate_map_diff`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDiff<K: Eq + Hash, V> {
    /// Entries of the new map that are absent from the old map or whose value
    /// changed, with their new values.
    pub added_or_modified: HashMap<K, V>,
    /// Entries of the old map whose keys are absent from the new map, with
    /// their old values.
    pub removed: HashMap<K, V>,
}

impl<K: Eq + Hash, V> MapDiff<K, V> {
    /// Returns `true` if the two maps were equal.
    pub fn is_empty(&self) -> bool {
        self.added_or_modified.is_empty() && self.removed.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for MapDiff<K, V> {
    fn default() -> Self {
        Self {
            added_or_modified: HashMap::new(),
            removed: HashMap::new(),
        }
    }
}

/// Compares `new` against `old`, treating two values as unchanged when
/// `equal(old_value, new_value)` holds.
pub fn calculate_map_diff<K, V>(
    new: &HashMap<K, V>,
    old: &HashMap<K, V>,
    equal: impl Fn(&V, &V) -> bool,
) -> MapDiff<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let added_or_modified = new
        .iter()
        .filter(|(key, value)| old.get(*key).map_or(true, |previous| !equal(previous, *value)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    let removed = old
        .iter()
        .filter(|(key, _)| !new.contains_key(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    MapDiff {
        added_or_modified,
        removed,
    }
}
