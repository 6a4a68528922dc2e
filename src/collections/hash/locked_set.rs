//! `LockedSet`: a lazily allocated `HashSet` behind a single lock.

use super::set::Set;
use crate::concurrency::{Exclusive, Guard, LockStrategy, ReadWrite};
use core::fmt;
use std::collections::HashSet;
use std::hash::Hash;

/// Storage plus a member count kept next to it, so `len` never touches the
/// table. `items` stays `None` until the first insertion.
struct Members<T> {
    items: Option<HashSet<T>>,
    len: usize,
}

impl<T> Members<T> {
    const fn empty() -> Self {
        Self { items: None, len: 0 }
    }
}

/// A hash set protected by the lock of strategy `S`.
///
/// Use the [`RwLockSet`] or [`MutexSet`] aliases. A default instance holds no
/// table; the first `add` allocates it and `clear` releases it again.
pub struct LockedSet<T, S: LockStrategy> {
    members: S::Lock<Members<T>>,
}

/// Set behind a reader/writer lock.
pub type RwLockSet<T> = LockedSet<T, ReadWrite>;

/// Set behind a mutex.
pub type MutexSet<T> = LockedSet<T, Exclusive>;

impl<T, S: LockStrategy> LockedSet<T, S> {
    /// Creates an empty set. Allocates nothing.
    pub fn new() -> Self {
        Self {
            members: Guard::new(Members::empty()),
        }
    }
}

impl<T, S: LockStrategy> Default for LockedSet<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash, S: LockStrategy> FromIterator<T> for LockedSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: HashSet<T> = iter.into_iter().collect();
        let members = if items.is_empty() {
            Members::empty()
        } else {
            Members {
                len: items.len(),
                items: Some(items),
            }
        };
        Self {
            members: Guard::new(members),
        }
    }
}

impl<T: Eq + Hash + Clone, S: LockStrategy> Set<T> for LockedSet<T, S> {
    fn add(&self, item: T) -> bool {
        self.members.write(|members| {
            let added = members.items.get_or_insert_with(HashSet::new).insert(item);
            if added {
                members.len += 1;
            }
            added
        })
    }

    fn delete(&self, item: &T) -> bool {
        self.members.write(|members| {
            let removed = members.items.as_mut().is_some_and(|items| items.remove(item));
            if removed {
                members.len -= 1;
            }
            removed
        })
    }

    fn has(&self, item: &T) -> bool {
        self.members
            .read(|members| members.items.as_ref().is_some_and(|items| items.contains(item)))
    }

    fn len(&self) -> usize {
        self.members.read(|members| members.len)
    }

    fn clear(&self) {
        self.members.write(|members| *members = Members::empty());
    }

    fn to_vec(&self) -> Vec<T> {
        self.members
            .read(|members| members.items.iter().flatten().cloned().collect())
    }
}

impl<T, S: LockStrategy> fmt::Debug for LockedSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.members.read(|members| {
            f.debug_struct("LockedSet")
                .field("strategy", &S::NAME)
                .field("len", &members.len)
                .field("allocated", &members.items.is_some())
                .finish()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ready_and_unallocated() {
        let set: RwLockSet<u32> = RwLockSet::default();
        assert!(!set.has(&1));
        assert!(!set.delete(&1));
        assert_eq!(set.len(), 0);
        assert!(set.to_vec().is_empty());
        assert!(format!("{set:?}").contains("allocated: false"));

        assert!(set.add(1));
        assert!(format!("{set:?}").contains("allocated: true"));
    }

    #[test]
    fn add_and_delete_report_change() {
        let set = MutexSet::new();
        assert!(set.add("a"));
        assert!(!set.add("a"));
        assert!(set.add("b"));
        assert_eq!(set.len(), 2);

        assert!(set.delete(&"a"));
        assert!(!set.delete(&"a"));
        assert_eq!(set.len(), 1);
        assert!(set.has(&"b"));
    }

    #[test]
    fn clear_releases_and_is_idempotent() {
        let set: RwLockSet<_> = (0..100).collect();
        assert_eq!(set.len(), 100);
        set.clear();
        assert_eq!(set.len(), 0);
        assert!(format!("{set:?}").contains("allocated: false"));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn range_stops_and_tolerates_reentry() {
        let set: MutexSet<_> = (0..10).collect();
        let mut seen = 0;
        set.range(|item| {
            set.delete(item);
            seen += 1;
            seen < 4
        });
        assert_eq!(seen, 4);
        assert_eq!(set.len(), 6);
    }
}
