//! Head-indexed FIFO storage shared by the locked queues.

/// Once more than this many slots have been consumed, and the consumed prefix
/// is at least half the backing array, `pop` moves the live suffix into a
/// fresh, right-sized array.
pub(crate) const SHRINK_THRESHOLD: usize = 64;

/// FIFO storage with O(1) amortized push and pop.
///
/// Popped slots are emptied and left in place below `head` until the next
/// compaction, so `pop` never shifts elements.
pub(crate) struct QueueCore<T> {
    items: Vec<Option<T>>,
    head: usize,
}

impl<T> QueueCore<T> {
    pub(crate) const fn new() -> Self {
        Self {
            items: Vec::new(),
            head: 0,
        }
    }

    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter().map(Some).collect(),
            head: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len() - self.head
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(Some(item));
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        let item = self.items.get_mut(self.head)?.take();
        self.head += 1;
        if self.head > SHRINK_THRESHOLD && self.head * 2 >= self.items.len() {
            self.compact();
        }
        item
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.items.get(self.head).and_then(Option::as_ref)
    }

    /// Drops every element and releases the backing array.
    pub(crate) fn clear(&mut self) {
        self.items = Vec::new();
        self.head = 0;
    }

    /// Live elements, front to back.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.items[self.head..].iter().flatten()
    }

    fn compact(&mut self) {
        let live: Vec<Option<T>> = self.items.drain(self.head..).collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            head = self.head,
            live = live.len(),
            capacity = self.items.capacity(),
            "compacting queue storage"
        );

        self.items = live;
        self.head = 0;
    }

    #[cfg(test)]
    fn consumed(&self) -> usize {
        self.head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut core = QueueCore::new();
        core.push('a');
        core.push('b');
        assert_eq!(core.peek(), Some(&'a'));
        assert_eq!(core.pop(), Some('a'));
        assert_eq!(core.pop(), Some('b'));
        assert_eq!(core.pop(), None);
        assert_eq!(core.len(), 0);
    }

    #[test]
    fn compacts_after_threshold() {
        let mut core = QueueCore::from_vec((0..100).collect());
        for expected in 0..SHRINK_THRESHOLD {
            assert_eq!(core.pop(), Some(expected));
        }
        assert_eq!(core.consumed(), SHRINK_THRESHOLD);

        // Slot 65 consumed: 65 > 64 and 130 >= 100.
        assert_eq!(core.pop(), Some(64));
        assert_eq!(core.consumed(), 0);
        assert_eq!(core.len(), 35);
        assert!(core.items.capacity() < 100);
        assert_eq!(core.iter().copied().collect::<Vec<_>>(), (65..100).collect::<Vec<_>>());
    }

    #[test]
    fn no_compaction_while_mostly_live() {
        let mut core = QueueCore::from_vec((0..1000).collect());
        for _ in 0..100 {
            core.pop();
        }
        assert_eq!(core.consumed(), 100);
        assert_eq!(core.len(), 900);
    }

    #[test]
    fn clear_resets_head() {
        let mut core = QueueCore::from_vec(vec![1, 2, 3]);
        core.pop();
        core.clear();
        assert_eq!(core.consumed(), 0);
        assert_eq!(core.len(), 0);
        assert_eq!(core.peek(), None);
    }
}
