//! Property tests: invariant closure, sort agreement and size accounting
//! over arbitrary inputs and operation sequences.

use nexus_heap::{Heap, HeapOrder, Max, MaxHeap, Min, MinHeap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Extract,
    Remove(i16),
    Heapify,
}

fn op() -> impl Strategy<Value = Op> {
    // Narrow value range so removals regularly hit duplicates.
    prop_oneof![
        4 => (-20i16..20).prop_map(Op::Insert),
        2 => Just(Op::Extract),
        2 => (-20i16..20).prop_map(Op::Remove),
        1 => Just(Op::Heapify),
    ]
}

/// Applies `ops`, checking the invariant and the size change after each.
fn run_ops<O: HeapOrder<i16>>(heap: &mut Heap<i16, O>, ops: &[Op]) -> Result<(), TestCaseError> {
    for op in ops {
        let before = heap.len();
        match *op {
            Op::Insert(v) => {
                heap.insert(v);
                prop_assert_eq!(heap.len(), before + 1);
            }
            Op::Extract => {
                let root = heap.peek().copied();
                prop_assert_eq!(heap.extract(), root);
                prop_assert_eq!(heap.len(), before.saturating_sub(1));
            }
            Op::Remove(v) => {
                let matches = heap.find(&v).len();
                heap.remove(&v);
                prop_assert_eq!(heap.len(), before - matches);
                prop_assert!(heap.find(&v).is_empty());
            }
            Op::Heapify => {
                let snapshot = heap.as_slice().to_vec();
                heap.heapify();
                prop_assert_eq!(heap.as_slice(), &snapshot[..]);
            }
        }
        prop_assert!(heap.is_heap(), "invariant broken after {:?}", op);
        prop_assert_eq!(heap.validate(), Ok(()));
    }
    Ok(())
}

proptest! {
    #[test]
    fn max_invariant_closure(ops in proptest::collection::vec(op(), 0..200)) {
        let mut heap: MaxHeap<i16> = Heap::new(Max);
        run_ops(&mut heap, &ops)?;
    }

    #[test]
    fn min_invariant_closure(
        initial in proptest::collection::vec(-20i16..20, 0..50),
        ops in proptest::collection::vec(op(), 0..200),
    ) {
        let mut heap = Heap::from_vec(initial, Min);
        prop_assert!(heap.is_heap());
        run_ops(&mut heap, &ops)?;
    }

    #[test]
    fn max_sorts_match_reference(items in proptest::collection::vec(any::<i32>(), 0..300)) {
        let heap: MaxHeap<i32> = items.clone().into();
        let storage = heap.as_slice().to_vec();

        let mut expected = items;
        expected.sort_unstable_by(|a, b| b.cmp(a));

        prop_assert_eq!(heap.heap_sort(), expected.clone());
        prop_assert_eq!(heap.heap_sort_via_extract(), expected.clone());
        prop_assert_eq!(heap.as_slice(), &storage[..]);
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn min_sorts_match_reference(items in proptest::collection::vec(any::<i32>(), 0..300)) {
        let heap: MinHeap<i32> = items.iter().copied().collect();
        let storage = heap.as_slice().to_vec();

        let mut expected = items;
        expected.sort_unstable();

        prop_assert_eq!(heap.heap_sort(), expected.clone());
        prop_assert_eq!(heap.heap_sort_via_extract(), expected);
        prop_assert_eq!(heap.as_slice(), &storage[..]);
    }

    #[test]
    fn insertion_and_heapify_agree_on_order(items in proptest::collection::vec(-50i32..50, 0..100)) {
        let bulk: MinHeap<i32> = items.clone().into();
        let mut incremental: MinHeap<i32> = Heap::new(Min);
        for &v in &items {
            incremental.insert(v);
        }

        // Layouts may differ; extraction order may not.
        prop_assert_eq!(bulk.heap_sort(), incremental.heap_sort());
    }

    #[test]
    fn find_reports_every_match(items in proptest::collection::vec(0u8..8, 0..64), target in 0u8..8) {
        let heap: MaxHeap<u8> = items.into();
        let found = heap.find(&target);

        prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
        for (pos, value) in heap.iter().enumerate() {
            prop_assert_eq!(found.contains(&pos), *value == target);
        }
    }
}
