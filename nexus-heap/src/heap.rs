//! Array-backed binary heap with a pluggable ordering strategy.
//!
//! Elements live in a single `Vec<T>` interpreted as a complete binary
//! tree. Every parent precedes both of its children under the heap's
//! [`HeapOrder`]; siblings are unordered relative to each other.

use core::fmt;
use std::iter::FusedIterator;

use crate::error::HeapViolation;
use crate::order::{HeapOrder, Max, Min};
use crate::raw;

/// A heap with the largest element at the root.
pub type MaxHeap<T> = Heap<T, Max>;

/// A heap with the smallest element at the root.
pub type MinHeap<T> = Heap<T, Min>;

/// A binary heap owning its elements, ordered by strategy `O`.
///
/// There is no default ordering: a heap is built from a strategy value
/// ([`Heap::new`]) or, for strategies implementing `Default`, through
/// [`Default`], [`From<Vec<T>>`] or [`FromIterator`].
///
/// # Example
///
/// ```
/// use nexus_heap::MaxHeap;
///
/// let mut heap = MaxHeap::default();
/// heap.insert(1).insert(2).insert(3).insert(4).insert(5).insert(6).insert(4);
///
/// assert_eq!(heap.as_slice(), &[6, 4, 5, 1, 3, 2, 4]);
/// assert_eq!(heap.find(&4), vec![1, 6]);
/// assert_eq!(heap.heap_sort(), vec![6, 5, 4, 4, 3, 2, 1]);
///
/// heap.remove(&4);
/// assert_eq!(heap.as_slice(), &[6, 3, 5, 1, 2]);
///
/// heap.insert(4);
/// assert_eq!(heap.extract(), Some(6));
/// assert_eq!(heap.as_slice(), &[5, 3, 4, 1, 2]);
/// ```
///
/// # Index snapshots
///
/// [`find`](Self::find) returns positions as they are at the time of the
/// call. Any insertion or removal may move every element, so positions
/// must be re-queried after mutating.
#[derive(Clone)]
pub struct Heap<T, O> {
    /// Heap-ordered elements, root at index 0.
    values: Vec<T>,
    order: O,
}

impl<T, O: HeapOrder<T>> Heap<T, O> {
    /// Creates an empty heap ordered by `order`.
    #[inline]
    pub const fn new(order: O) -> Self {
        Self {
            values: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Builds a heap from unordered values in O(n).
    ///
    /// ```
    /// use nexus_heap::{Heap, Max};
    ///
    /// let heap = Heap::from_vec(vec![7, 4, 9, 6, 1, 8, 4], Max);
    /// assert_eq!(heap.as_slice(), &[9, 6, 8, 4, 1, 7, 4]);
    /// assert!(heap.is_heap());
    /// ```
    pub fn from_vec(values: Vec<T>, order: O) -> Self {
        let mut heap = Self { values, order };
        heap.heapify();
        heap
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the capacity of the backing storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Returns the ordering strategy.
    #[inline]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the elements in heap (breadth-first) order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator over the elements in heap order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Consumes the heap, returning its storage in heap order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Inserts a value, returning `self` for chaining.
    ///
    /// The value is appended as the next leaf and bubbled up until its
    /// parent precedes it. O(log n).
    pub fn insert(&mut self, value: T) -> &mut Self {
        self.values.push(value);
        let pos = self.values.len() - 1;
        raw::sift_up(&mut self.values, &self.order, pos);
        self
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the root.
    ///
    /// Returns `None` if the heap is empty. O(log n).
    pub fn extract(&mut self) -> Option<T> {
        raw::pop_root(&mut self.values, &self.order)
    }

    /// Removes and returns the element at storage index `pos`.
    ///
    /// Returns `None` if `pos` is out of range. Pair with
    /// [`find`](Self::find) for positional removal. O(log n).
    pub fn remove_at(&mut self, pos: usize) -> Option<T> {
        raw::remove_at(&mut self.values, &self.order, pos)
    }

    /// Removes every element equal to `target`, returning `self` for
    /// chaining. O(k log n) for k matches plus a scan per match.
    pub fn remove(&mut self, target: &T) -> &mut Self
    where
        T: PartialEq,
    {
        self.remove_where(|value| value == target);
        self
    }

    /// Removes every element whose derived key equals `target`.
    ///
    /// ```
    /// use nexus_heap::{Heap, Max};
    ///
    /// let mut heap = Heap::from_vec(vec![(3, "a"), (1, "b"), (2, "b")], Max);
    /// heap.remove_by_key(&"b", |(_, tag)| tag);
    /// assert_eq!(heap.as_slice(), &[(3, "a")]);
    /// ```
    pub fn remove_by_key<K, F>(&mut self, target: &K, mut value_of: F) -> &mut Self
    where
        K: PartialEq + ?Sized,
        F: FnMut(&T) -> &K,
    {
        self.remove_where(|value| value_of(value) == target);
        self
    }

    /// Removes all matches, one at a time. Each removal moves elements, so
    /// the next match is looked up again rather than taken from an index
    /// list resolved up front.
    fn remove_where<P>(&mut self, mut matches: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let count = self.values.iter().filter(|&value| matches(value)).count();

        for _ in 0..count {
            let Some(pos) = self.values.iter().position(|value| matches(value)) else {
                break;
            };
            raw::remove_at(&mut self.values, &self.order, pos);
        }

        if count > 0 {
            log::debug!("removed {} matching elements, {} remain", count, self.values.len());
        }
        count
    }

    /// Returns an iterator extracting roots while `pred` holds.
    ///
    /// Elements come out in heap order. Iteration stops at the first root
    /// rejected by `pred`, which stays in the heap.
    ///
    /// ```
    /// use nexus_heap::MinHeap;
    ///
    /// let mut deadlines: MinHeap<u64> = [100, 50, 150, 75].into_iter().collect();
    ///
    /// // Fire everything due at t = 80
    /// let fired: Vec<_> = deadlines.drain_while(|&t| t <= 80).collect();
    /// assert_eq!(fired, vec![50, 75]);
    /// assert_eq!(deadlines.peek(), Some(&100));
    /// ```
    #[inline]
    pub fn drain_while<F>(&mut self, pred: F) -> DrainWhile<'_, T, O, F>
    where
        F: FnMut(&T) -> bool,
    {
        DrainWhile { heap: self, pred }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the root without removing it, or `None` if empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.values.first()
    }

    /// Returns every storage index holding a value equal to `target`,
    /// ascending.
    pub fn find(&self, target: &T) -> Vec<usize>
    where
        T: PartialEq,
    {
        self.find_by_key(target, |value| value)
    }

    /// Returns every storage index whose derived key equals `target`,
    /// ascending.
    ///
    /// ```
    /// use nexus_heap::{Heap, Min};
    ///
    /// let heap = Heap::from_vec(vec![(1, 'x'), (2, 'y'), (3, 'x')], Min);
    /// assert_eq!(heap.find_by_key(&'x', |(_, tag)| tag), vec![0, 2]);
    /// ```
    pub fn find_by_key<K, F>(&self, target: &K, mut value_of: F) -> Vec<usize>
    where
        K: PartialEq + ?Sized,
        F: FnMut(&T) -> &K,
    {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, value)| value_of(value) == target)
            .map(|(pos, _)| pos)
            .collect()
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Restores the heap property over the whole storage in O(n).
    ///
    /// Has no effect on a heap that is already valid.
    pub fn heapify(&mut self) {
        log::trace!("heapify over {} elements", self.values.len());
        raw::heapify(&mut self.values, &self.order);
    }

    /// Returns the elements in extraction order using in-place heap sort
    /// on a copy. The heap itself is left untouched.
    ///
    /// Extraction order is descending for [`MaxHeap`] and ascending for
    /// [`MinHeap`].
    pub fn heap_sort(&self) -> Vec<T>
    where
        T: Clone,
    {
        log::trace!("heap sort over {} elements", self.values.len());
        let mut sorted = self.values.clone();
        raw::sort_heap(&mut sorted, &self.order);
        sorted
    }

    /// Returns the elements in extraction order by repeatedly extracting
    /// the root of a copy. The heap itself is left untouched.
    ///
    /// Agrees with [`heap_sort`](Self::heap_sort) up to the placement of
    /// equal elements.
    pub fn heap_sort_via_extract(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut scratch = self.values.clone();
        let mut sorted = Vec::with_capacity(scratch.len());
        while let Some(root) = raw::pop_root(&mut scratch, &self.order) {
            sorted.push(root);
        }
        sorted
    }

    /// Consumes the heap, returning its elements in extraction order.
    ///
    /// Same algorithm as [`heap_sort`](Self::heap_sort) without the copy.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        raw::sort_heap(&mut self.values, &self.order);
        self.values
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Returns `true` if every parent precedes its children.
    #[inline]
    pub fn is_heap(&self) -> bool {
        self.is_heap_at(0)
    }

    /// Returns `true` if the subtree rooted at storage index `pos` is a
    /// valid heap. Indices past the end are empty subtrees.
    pub fn is_heap_at(&self, pos: usize) -> bool {
        raw::is_heap_at(&self.values, &self.order, pos)
    }

    /// Checks the heap property, reporting the first broken pair.
    ///
    /// # Errors
    ///
    /// Returns [`HeapViolation`] naming the first parent/child pair, in
    /// breadth-first order, where the parent does not precede the child.
    pub fn validate(&self) -> Result<(), HeapViolation> {
        match raw::find_violation(&self.values, &self.order) {
            Some((parent, child)) => Err(HeapViolation { parent, child }),
            None => Ok(()),
        }
    }
}

impl<T: PartialOrd> Heap<T, Max> {
    /// Removes and returns the largest element.
    #[inline]
    pub fn extract_max(&mut self) -> Option<T> {
        self.extract()
    }
}

impl<T: PartialOrd> Heap<T, Min> {
    /// Removes and returns the smallest element.
    #[inline]
    pub fn extract_min(&mut self) -> Option<T> {
        self.extract()
    }
}

impl<T, O: HeapOrder<T> + Default> Default for Heap<T, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T, O: HeapOrder<T> + Default> From<Vec<T>> for Heap<T, O> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values, O::default())
    }
}

impl<T, O: HeapOrder<T> + Default> FromIterator<T> for Heap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), O::default())
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.values.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for Heap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl<'a, T, O> IntoIterator for &'a Heap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T, O> IntoIterator for Heap<T, O> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements in heap order, not sorted order.
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// An iterator that extracts roots while a predicate holds.
///
/// Created by [`Heap::drain_while`].
pub struct DrainWhile<'a, T, O, F>
where
    O: HeapOrder<T>,
    F: FnMut(&T) -> bool,
{
    heap: &'a mut Heap<T, O>,
    pred: F,
}

impl<'a, T, O, F> Iterator for DrainWhile<'a, T, O, F>
where
    O: HeapOrder<T>,
    F: FnMut(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let root = self.heap.peek()?;
        if (self.pred)(root) {
            self.heap.extract()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.heap.len()))
    }
}

impl<'a, T, O, F> FusedIterator for DrainWhile<'a, T, O, F>
where
    O: HeapOrder<T>,
    F: FnMut(&T) -> bool,
{
}
