//! Ordering and equality predicates injected into containers at construction.

use core::fmt;
use std::sync::Arc;

/// Strict weak ordering used by heap-based containers.
///
/// `less(a, b)` returns `true` when `a` must leave the container before `b`,
/// so `a < b` yields a min-heap and `a > b` a max-heap.
///
/// # Contract
///
/// The relation must be irreflexive (`less(a, a)` is never true) and
/// transitive. Debug builds assert irreflexivity on every push; release builds
/// do not check. A broken comparator scrambles the pop order but can never
/// corrupt a container.
pub trait Less<T: ?Sized> {
    /// Returns `true` if `a` has strictly higher priority than `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Less<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders by `Ord`, smallest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Less<T> for MinFirst {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders by `Ord`, largest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Less<T> for MaxFirst {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Value equality injected into maps for compare-and-swap.
///
/// Maps never assume `V: PartialEq`; the predicate is attached at construction
/// with [`Equality::new`], or [`Equality::native`] when `V` already has one.
pub struct Equality<V: ?Sized> {
    eq: Arc<dyn Fn(&V, &V) -> bool + Send + Sync>,
}

impl<V: ?Sized> Equality<V> {
    /// Wraps an arbitrary equality predicate.
    pub fn new<F>(eq: F) -> Self
    where
        F: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        Self { eq: Arc::new(eq) }
    }

    /// Evaluates the predicate.
    #[inline]
    pub fn eq(&self, a: &V, b: &V) -> bool {
        (self.eq)(a, b)
    }
}

impl<V: PartialEq + ?Sized + 'static> Equality<V> {
    /// Uses `V`'s own `PartialEq`.
    pub fn native() -> Self {
        Self::new(|a: &V, b: &V| a == b)
    }
}

impl<V: ?Sized> Clone for Equality<V> {
    fn clone(&self) -> Self {
        Self {
            eq: Arc::clone(&self.eq),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Equality<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Equality(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &&str, b: &&str| a.len() < b.len();
        assert!(by_len.less(&"a", &"bb"));
        assert!(!by_len.less(&"bb", &"a"));
    }

    #[test]
    fn min_and_max_first_are_opposites() {
        assert!(MinFirst.less(&1, &2));
        assert!(MaxFirst.less(&2, &1));
        assert!(!MinFirst.less(&2, &2));
        assert!(!MaxFirst.less(&2, &2));
    }

    #[test]
    fn equality_native_and_custom() {
        let native = Equality::<i32>::native();
        assert!(native.eq(&3, &3));
        assert!(!native.eq(&3, &4));

        let loose = Equality::new(|a: &f64, b: &f64| (a - b).abs() < 1e-9);
        assert!(loose.clone().eq(&0.1, &(0.3 - 0.2)));
    }
}
