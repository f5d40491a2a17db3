//! Slice-level heap primitives.
//!
//! These functions treat a slice as a complete binary tree laid out in
//! breadth-first order:
//!
//! ```text
//!            0
//!        1       2
//!      3   4   5   6
//!
//! left(i) = 2i + 1    right(i) = 2i + 2    parent(i) = (i - 1) / 2
//! ```
//!
//! Sifting is swap-based so that equal elements keep the exact positions
//! a caller can predict from the comparison sequence.

use crate::HeapOrder;

/// Index of the left child of `i`.
#[inline]
pub(crate) const fn left(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of `i`.
#[inline]
pub(crate) const fn right(i: usize) -> usize {
    2 * i + 2
}

/// Index of the parent of `i`. The root has no parent.
#[inline]
pub(crate) const fn parent(i: usize) -> usize {
    debug_assert!(i > 0, "root has no parent");
    (i - 1) / 2
}

/// Moves the element at `pos` toward the root while its parent does not
/// precede it. Returns the final position.
pub(crate) fn sift_up<T, O>(values: &mut [T], order: &O, pos: usize) -> usize
where
    O: HeapOrder<T> + ?Sized,
{
    let mut hole = pos;

    while hole > 0 {
        let up = parent(hole);
        if order.precedes(&values[up], &values[hole]) {
            break;
        }
        values.swap(hole, up);
        hole = up;
    }

    hole
}

/// Moves the element at `pos` toward the leaves while a child outranks it.
/// Returns the final position.
///
/// Only `values[..values.len()]` is considered, so callers restrict the
/// active region by passing a shorter slice.
pub(crate) fn sift_down<T, O>(values: &mut [T], order: &O, pos: usize) -> usize
where
    O: HeapOrder<T> + ?Sized,
{
    let len = values.len();
    let mut hole = pos;

    loop {
        let l = left(hole);
        if l >= len {
            break;
        }
        let r = right(hole);

        if order.precedes(&values[hole], &values[l])
            && (r >= len || order.precedes(&values[hole], &values[r]))
        {
            break;
        }

        // Left wins ties.
        let child = if r < len && !order.precedes(&values[l], &values[r]) {
            r
        } else {
            l
        };

        values.swap(hole, child);
        hole = child;
    }

    hole
}

/// Establishes the heap property over the whole slice in O(n).
///
/// Sinks every non-leaf, from the last one (`len / 2 - 1`) back to the root.
pub(crate) fn heapify<T, O>(values: &mut [T], order: &O)
where
    O: HeapOrder<T> + ?Sized,
{
    for i in (0..values.len() / 2).rev() {
        sift_down(values, order, i);
    }
}

/// Sorts a valid heap in place into extraction order (root first).
///
/// Repeatedly swaps the root behind the shrinking active region, which
/// leaves the region in reverse extraction order; a final reverse fixes
/// that up. O(n log n), no allocation.
pub(crate) fn sort_heap<T, O>(values: &mut [T], order: &O)
where
    O: HeapOrder<T> + ?Sized,
{
    for end in (1..values.len()).rev() {
        values.swap(0, end);
        sift_down(&mut values[..end], order, 0);
    }
    values.reverse();
}

/// Removes the root, restoring the heap over the remaining elements.
pub(crate) fn pop_root<T, O>(values: &mut Vec<T>, order: &O) -> Option<T>
where
    O: HeapOrder<T> + ?Sized,
{
    match values.len() {
        0 => None,
        1 => values.pop(),
        len => {
            values.swap(0, len - 1);
            let root = values.pop();
            sift_down(values, order, 0);
            root
        }
    }
}

/// Removes the element at `pos`, restoring the heap around the vacated slot.
///
/// The last element is swapped into `pos`. Coming from an unrelated
/// subtree it may violate the invariant in either direction, so it is
/// sifted up when it now precedes its parent and down otherwise.
pub(crate) fn remove_at<T, O>(values: &mut Vec<T>, order: &O, pos: usize) -> Option<T>
where
    O: HeapOrder<T> + ?Sized,
{
    let last = values.len().checked_sub(1)?;
    if pos > last {
        return None;
    }
    if pos == last {
        return values.pop();
    }

    values.swap(pos, last);
    let removed = values.pop();

    if pos > 0 && order.precedes(&values[pos], &values[parent(pos)]) {
        sift_up(values, order, pos);
    } else {
        sift_down(values, order, pos);
    }

    removed
}

/// Checks the subtree rooted at `pos`. Positions past the end are empty
/// subtrees and therefore valid.
pub(crate) fn is_heap_at<T, O>(values: &[T], order: &O, pos: usize) -> bool
where
    O: HeapOrder<T> + ?Sized,
{
    if pos >= values.len() {
        return true;
    }

    let (l, r) = (left(pos), right(pos));
    if l < values.len() && !order.precedes(&values[pos], &values[l]) {
        return false;
    }
    if r < values.len() && !order.precedes(&values[pos], &values[r]) {
        return false;
    }

    is_heap_at(values, order, l) && is_heap_at(values, order, r)
}

/// Returns the first `(parent, child)` pair, in breadth-first child order,
/// where the parent does not precede the child.
pub(crate) fn find_violation<T, O>(values: &[T], order: &O) -> Option<(usize, usize)>
where
    O: HeapOrder<T> + ?Sized,
{
    (1..values.len())
        .map(|child| (parent(child), child))
        .find(|&(up, child)| !order.precedes(&values[up], &values[child]))
}
