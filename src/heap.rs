use crate::polarity::Polarity;
use log::{debug, trace};

fn left(parent: usize) -> usize { parent * 2 + 1 }
fn right(parent: usize) -> usize { parent * 2 + 2 }
fn parent(child: usize) -> usize { (child - 1) / 2 }

/// Binary heap over a dense array, with runtime-selectable polarity.
///
/// The items form a complete binary tree in array order: children of index
/// `i` live at `2i+1` and `2i+2`. For every non-root index, the parent is
/// never strictly out-prioritized by the child under the current
/// [`Polarity`]. The array has no holes, so the tree is always
/// left-complete.
///
/// The backing storage is exclusively owned; the only views handed out are
/// read-only (`as_slice`, `iter`, the `Debug` impl).
pub struct PriorityHeap<T> {
    pub(crate) items: Vec<T>,
    pub(crate) polarity: Polarity,
}

impl<T: Ord> PriorityHeap<T> {
    pub fn new(polarity: Polarity) -> Self {
        Self {
            items: Vec::new(),
            polarity,
        }
    }

    pub fn with_capacity(polarity: Polarity, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            polarity,
        }
    }

    /// Takes ownership of an arbitrary sequence and establishes heap order
    /// in place. This is the O(n) bulk build; it is always preferable to
    /// inserting the items one at a time.
    pub fn from_vec(items: Vec<T>, polarity: Polarity) -> Self {
        let mut heap = Self { items, polarity };
        heap.build();
        heap.check();
        heap
    }

    /// Inserts an item, keeping heap order. Amortized O(log n).
    pub fn insert(&mut self, item: T) {
        let index = self.items.len();
        self.items.push(item);
        self.sift_up(index);
        self.check();
    }

    /// Returns the highest-priority item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes and returns the highest-priority item, or `None` if the heap
    /// is empty. O(log n).
    pub fn extract_root(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last_index = self.items.len() - 1;
        self.items.swap(0, last_index);
        let result = self.items.pop();
        self.sift_down(0);
        self.check();
        result
    }

    /// Removes and returns the item at an arbitrary array index, or `None`
    /// if the index is out of range. O(log n).
    ///
    /// The vacated slot is filled with the former last item, which may
    /// belong either deeper or shallower than the removed one, so both sift
    /// directions run: down first, then up. Whichever direction is not
    /// needed falls through without swapping.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        trace!("remove_at: index {} of {}", index, self.items.len());
        let last_index = self.items.len() - 1;
        self.items.swap(index, last_index);
        let result = self.items.pop();
        self.sift_down(index);
        self.sift_up(index);
        self.check();
        result
    }

    /// Returns the array index holding `key`, or `None` if no item equals
    /// it. Subtrees whose root is already out-prioritized by `key` cannot
    /// contain it and are pruned, so the search rarely visits the whole
    /// array; the worst case (many items sharing `key`'s priority) is O(n).
    pub fn position_of(&self, key: &T) -> Option<usize> {
        self.position_of_from(key, 0)
    }

    /// Same as `position_of`, searching only the subtree rooted at `from`.
    pub fn position_of_from(&self, key: &T, from: usize) -> Option<usize> {
        if from >= self.items.len() {
            return None;
        }
        let node = &self.items[from];
        if self.polarity.wins(key, node) {
            // Everything below this node is out-prioritized by it, so the
            // key cannot be anywhere in this subtree.
            return None;
        }
        if *key == *node {
            return Some(from);
        }
        self.position_of_from(key, left(from))
            .or_else(|| self.position_of_from(key, right(from)))
    }

    pub(crate) fn sift_up(&mut self, mut i: usize) {
        if i >= self.items.len() {
            return;
        }
        while i > 0 {
            let parent = parent(i);
            if !self.polarity.wins(&self.items[i], &self.items[parent]) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    pub(crate) fn sift_down(&mut self, i: usize) {
        let end = self.items.len();
        self.sift_down_to(i, end);
    }

    /// Sift down within `items[..end]`. The sort uses the bounded form to
    /// exclude the already-placed tail.
    pub(crate) fn sift_down_to(&mut self, mut i: usize, end: usize) {
        loop {
            let mut chosen = i;
            let left = left(i);
            if left < end && self.polarity.wins(&self.items[left], &self.items[chosen]) {
                chosen = left;
            }
            let right = right(i);
            if right < end && self.polarity.wins(&self.items[right], &self.items[chosen]) {
                chosen = right;
            }
            if chosen == i {
                break;
            }
            self.items.swap(i, chosen);
            i = chosen;
        }
    }

    /// Establishes heap order over the whole array in O(n): sift down every
    /// internal node, last one first.
    pub(crate) fn build(&mut self) {
        let n = self.items.len();
        debug!("build: {} items, {:?} polarity", n, self.polarity);
        for i in (0..n / 2).rev() {
            self.sift_down(i);
        }
    }

    // Debug builds only.
    pub(crate) fn check(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        for i in 1..self.items.len() {
            assert!(!self.polarity.wins(&self.items[i], &self.items[parent(i)]));
        }
    }
}

impl<T> PriorityHeap<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Read-only view of the backing array in its current order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Surrenders the backing array in its current order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Ord> Default for PriorityHeap<T> {
    fn default() -> Self {
        Self::new(Polarity::Min)
    }
}

use core::fmt::{Debug, Formatter};

impl<T: Debug> Debug for PriorityHeap<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_list().entries(self.items.iter()).finish()
    }
}
