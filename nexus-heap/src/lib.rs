//! Array-backed binary heap with pluggable ordering.
//!
//! `nexus-heap` provides a single owning container, [`Heap`], whose
//! ordering is a strategy type rather than a subclass or a wrapper type:
//!
//! ```text
//! Heap<T, Max>        - MaxHeap<T>, largest at the root
//! Heap<T, Min>        - MinHeap<T>, smallest at the root
//! Heap<T, FnOrder<F>> - any predicate closure
//! Heap<T, KeyOrder>   - derived key (e.g. a priority field) under Max/Min
//! ```
//!
//! Strategies are zero-sized where possible and dispatched statically, so
//! `MaxHeap` and `MinHeap` compile to the same code as a hand-specialized
//! heap.
//!
//! # Quick Start
//!
//! ```
//! use nexus_heap::{MaxHeap, MinHeap};
//!
//! // Bulk construction heapifies in O(n)
//! let mut heap: MaxHeap<u32> = vec![7, 4, 9, 6, 1, 8, 4].into();
//! assert_eq!(heap.as_slice(), &[9, 6, 8, 4, 1, 7, 4]);
//!
//! // Sorting never disturbs the live heap
//! assert_eq!(heap.heap_sort(), vec![9, 8, 7, 6, 4, 4, 1]);
//!
//! // Remove every occurrence of a value
//! heap.remove(&4);
//! assert_eq!(heap.len(), 5);
//! assert!(heap.is_heap());
//!
//! let mut min: MinHeap<u32> = vec![7, 4, 9, 6, 1, 8, 4].into();
//! assert_eq!(min.extract_min(), Some(1));
//! ```
//!
//! # Complexity
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | [`insert`](Heap::insert) | O(log n) | bubble-up from the new leaf |
//! | [`extract`](Heap::extract) | O(log n) | root swapped with last, sink-down |
//! | [`heapify`](Heap::heapify) | O(n) | bottom-up, used by `from_vec` |
//! | [`find`](Heap::find) | O(n) | index snapshot, not a live handle |
//! | [`remove`](Heap::remove) | O(k (n + log n)) | re-scans after every removal |
//! | [`heap_sort`](Heap::heap_sort) | O(n log n) | on a copy |
//!
//! # Thread Safety
//!
//! No internal locking. Mutation takes `&mut self`; wrap the heap in a
//! lock to share it between threads.

#![warn(missing_docs)]

pub mod error;
pub mod heap;
pub mod order;
mod raw;

pub use error::HeapViolation;
pub use heap::{DrainWhile, Heap, MaxHeap, MinHeap};
pub use order::{FnOrder, HeapOrder, KeyOrder, Max, Min};
