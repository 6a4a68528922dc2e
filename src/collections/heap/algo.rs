//! Binary-heap algorithms over any indexable storage.
//!
//! The functions here only see storage through [`HeapInterface`], so they can
//! drive a container's own `Vec`, a borrowed adapter, or caller-owned storage.
//! The parent of index `i` is `(i - 1) / 2`; its children are `2i + 1` and
//! `2i + 2`. After every public function returns, no element is strictly
//! higher priority than its parent.

/// Storage a binary heap can be maintained over.
pub trait HeapInterface {
    /// Element type.
    type Item;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if no elements are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the element at `i` has strictly higher priority than
    /// the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`. Never called with `i == j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Appends an element at index `len()`.
    fn push_back(&mut self, item: Self::Item);

    /// Removes the element at index `len() - 1`.
    fn pop_back(&mut self) -> Option<Self::Item>;
}

/// Establishes the heap invariant over arbitrary contents in O(n).
pub fn init<H: HeapInterface + ?Sized>(heap: &mut H) {
    let len = heap.len();
    for node in (0..len / 2).rev() {
        sift_down(heap, node);
    }
}

/// Appends `item` and moves it up to its place. O(log n).
pub fn push<H: HeapInterface + ?Sized>(heap: &mut H, item: H::Item) {
    heap.push_back(item);
    let last = heap.len() - 1;
    debug_assert!(
        !heap.less(last, last),
        "comparator is not irreflexive: less(x, x) returned true"
    );
    sift_up(heap, last);
}

/// Removes and returns the highest-priority element. O(log n).
///
/// The root is swapped with the last slot and removed before the new root
/// sifts down, so swap observers never see the departing element again.
pub fn pop<H: HeapInterface + ?Sized>(heap: &mut H) -> Option<H::Item> {
    let len = heap.len();
    if len == 0 {
        return None;
    }
    if len > 1 {
        heap.swap(0, len - 1);
    }
    let item = heap.pop_back();
    if !heap.is_empty() {
        sift_down(heap, 0);
    }
    item
}

/// Removes and returns the element at `index`, or `None` if out of bounds.
pub fn remove<H: HeapInterface + ?Sized>(heap: &mut H, index: usize) -> Option<H::Item> {
    let len = heap.len();
    if index >= len {
        return None;
    }
    let last = len - 1;
    if index != last {
        heap.swap(index, last);
    }
    let item = heap.pop_back();
    fix(heap, index);
    item
}

/// Restores the invariant after the element at `index` changed priority.
/// Out-of-bounds indices are ignored.
pub fn fix<H: HeapInterface + ?Sized>(heap: &mut H, index: usize) {
    if index >= heap.len() {
        return;
    }
    if !sift_down(heap, index) {
        sift_up(heap, index);
    }
}

/// Moves the element at `node` toward the root while it outranks its parent.
pub fn sift_up<H: HeapInterface + ?Sized>(heap: &mut H, mut node: usize) {
    while node > 0 {
        let parent = (node - 1) / 2;
        if !heap.less(node, parent) {
            break;
        }
        heap.swap(node, parent);
        node = parent;
    }
}

/// Moves the element at `start` toward the leaves while a child outranks it.
/// Returns `true` if it moved.
pub fn sift_down<H: HeapInterface + ?Sized>(heap: &mut H, start: usize) -> bool {
    let len = heap.len();
    let mut node = start;
    loop {
        let left = 2 * node + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let mut best = left;
        if right < len && heap.less(right, left) {
            best = right;
        }
        if !heap.less(best, node) {
            break;
        }
        heap.swap(node, best);
        node = best;
    }
    node > start
}

/// Returns `true` if no element is strictly higher priority than its parent.
pub fn is_heap<H: HeapInterface + ?Sized>(heap: &H) -> bool {
    (1..heap.len()).all(|node| !heap.less(node, (node - 1) / 2))
}
