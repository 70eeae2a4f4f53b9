use crate::heap::PriorityHeap;
use core::fmt::Debug;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Asserts the heap-order invariant over the whole backing array: no child
/// strictly out-prioritizes its parent under the heap's polarity.
pub fn assert_heap_is_well_formed<T: Ord + Debug>(heap: &PriorityHeap<T>) {
    let items = heap.as_slice();
    for i in 1..items.len() {
        let parent = (i - 1) / 2;
        assert!(
            !heap.polarity().wins(&items[i], &items[parent]),
            "heap order violated at index {} (parent {}): {:?}",
            i,
            parent,
            items
        );
    }
}
