use crate::heap::PriorityHeap;
use crate::polarity::Polarity;
use log::debug;

impl<T: Ord> PriorityHeap<T> {
    /// Reorders the backing array into fully sorted order, in place.
    ///
    /// Classic heapsort: decide which polarity the requested direction
    /// needs, rebuild heap order under it, then repeatedly swap the root
    /// into the tail and restore order over the shrinking prefix. This is a
    /// terminal operation for the heap ordering: afterward the array is
    /// sorted, which is not a valid heap-order tree, so further queue
    /// operations see the sorted array as arbitrary input.
    pub fn sort(&mut self, ascending: bool) {
        let need = Polarity::for_sort(ascending);
        if need != self.polarity {
            debug!("sort: switching polarity {:?} -> {:?}", self.polarity, need);
            self.polarity = need;
        }
        // The rebuild is unconditional: a polarity switch invalidates the
        // old heap order, and so does a previous call to sort().
        self.build();
        for i in (1..self.items.len()).rev() {
            self.items.swap(0, i);
            self.sift_down_to(0, i);
        }
        debug!("sort: {} items, ascending={}", self.items.len(), ascending);
    }

    /// Sorts and surrenders the backing array.
    pub fn into_sorted_vec(mut self, ascending: bool) -> Vec<T> {
        self.sort(ascending);
        self.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use crate::heap::PriorityHeap;
    use crate::polarity::Polarity;
    use crate::testing::*;

    #[test]
    fn sort_directions_test() {
        init_test();
        fn case(description: &str, polarity: Polarity, ascending: bool, expected: &[i32]) {
            let mut heap = PriorityHeap::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], polarity);
            heap.sort(ascending);
            assert_eq!(heap.as_slice(), expected, "{}", description);
        }

        // Every combination of initial polarity and requested direction.
        let up = &[1, 2, 3, 4, 5, 6, 7, 8, 9];
        let down = &[9, 8, 7, 6, 5, 4, 3, 2, 1];
        case("max heap, ascending", Polarity::Max, true, up);
        case("max heap, descending", Polarity::Max, false, down);
        case("min heap, ascending", Polarity::Min, true, up);
        case("min heap, descending", Polarity::Min, false, down);
    }

    #[test]
    fn sort_unordered_input_test() {
        init_test();
        let items = vec![12, -4, 7, 7, 0, 33, -4, 19, 2, 5];
        let mut expected = items.clone();
        expected.sort();

        let mut heap = PriorityHeap::from_vec(items.clone(), Polarity::Min);
        heap.sort(true);
        assert_eq!(heap.as_slice(), expected.as_slice());

        expected.reverse();
        let mut heap = PriorityHeap::from_vec(items, Polarity::Min);
        heap.sort(false);
        assert_eq!(heap.as_slice(), expected.as_slice());
    }

    #[test]
    fn sort_twice_test() {
        let mut heap = PriorityHeap::from_vec(vec![3, 1, 4, 1, 5], Polarity::Max);
        heap.sort(true);
        assert_eq!(heap.as_slice(), &[1, 1, 3, 4, 5]);
        // Same direction again: rebuild must cope with already-sorted input.
        heap.sort(true);
        assert_eq!(heap.as_slice(), &[1, 1, 3, 4, 5]);
        heap.sort(false);
        assert_eq!(heap.as_slice(), &[5, 4, 3, 1, 1]);
    }

    #[test]
    fn sort_small_test() {
        let mut heap: PriorityHeap<i32> = PriorityHeap::new(Polarity::Max);
        heap.sort(true);
        assert!(heap.is_empty());

        let mut heap = PriorityHeap::from_vec(vec![42], Polarity::Min);
        heap.sort(false);
        assert_eq!(heap.as_slice(), &[42]);
    }

    #[test]
    fn into_sorted_vec_test() {
        let heap = PriorityHeap::from_vec(vec![9, 1, 8, 2], Polarity::Max);
        assert_eq!(heap.into_sorted_vec(true), vec![1, 2, 8, 9]);

        let heap = PriorityHeap::from_vec(vec![9, 1, 8, 2], Polarity::Max);
        assert_eq!(heap.into_sorted_vec(false), vec![9, 8, 2, 1]);
    }

    #[test]
    fn sort_after_mutation_test() {
        init_test();
        let mut heap = PriorityHeap::new(Polarity::Min);
        for &item in [6, 2, 9, 4].iter() {
            heap.insert(item);
        }
        heap.remove_at(1);
        let mut expected = heap.as_slice().to_vec();
        expected.sort();
        heap.sort(true);
        assert_eq!(heap.as_slice(), expected.as_slice());
    }
}
