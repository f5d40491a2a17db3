//! Ordering strategies for [`Heap`](crate::Heap).
//!
//! A strategy answers one question: may `a` sit at or above `b`? The heap
//! keeps that relation between every parent and its children, so the same
//! sift code serves max-heaps, min-heaps and anything keyed on a field.
//!
//! ```text
//! Max            - a >= b, largest at the root
//! Min            - a <= b, smallest at the root
//! FnOrder(f)     - f(a, b), caller-defined
//! KeyOrder(f, S) - sense S applied to f(a), f(b)
//! ```
//!
//! The predicate must describe a consistent total preorder. An
//! inconsistent one never causes undefined behavior, but the resulting
//! permutation is unspecified.

/// Decides the relative position of two elements in a heap.
///
/// `precedes(a, b)` returns `true` when `a` is not worse than `b`, i.e.
/// `a` may be the parent of `b`. Equal elements must precede each other.
///
/// # Example
///
/// ```
/// use nexus_heap::{Heap, HeapOrder};
///
/// /// Shortest string first.
/// #[derive(Default)]
/// struct Shortest;
///
/// impl HeapOrder<String> for Shortest {
///     fn precedes(&self, a: &String, b: &String) -> bool {
///         a.len() <= b.len()
///     }
/// }
///
/// let mut heap: Heap<String, Shortest> = Heap::default();
/// heap.insert("ccc".into()).insert("a".into()).insert("bb".into());
/// assert_eq!(heap.peek().map(String::as_str), Some("a"));
/// ```
pub trait HeapOrder<T: ?Sized> {
    /// Returns `true` if `a` may sit at or above `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, O: HeapOrder<T> + ?Sized> HeapOrder<T> for &O {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (**self).precedes(a, b)
    }
}

/// Largest element at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Max;

impl<T: PartialOrd + ?Sized> HeapOrder<T> for Max {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a >= b
    }
}

/// Smallest element at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Min;

impl<T: PartialOrd + ?Sized> HeapOrder<T> for Min {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Orders by an arbitrary predicate closure.
///
/// ```
/// use nexus_heap::{FnOrder, Heap};
///
/// // Max-heap on the absolute value.
/// let mut heap = Heap::new(FnOrder(|a: &i32, b: &i32| a.abs() >= b.abs()));
/// heap.insert(3).insert(-7).insert(5);
/// assert_eq!(heap.extract(), Some(-7));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<T, F> HeapOrder<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Orders by a key derived from each element, under an inner sense.
///
/// ```
/// use nexus_heap::{Heap, KeyOrder, Min};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Job {
///     priority: u8,
///     name: &'static str,
/// }
///
/// let mut jobs = Heap::new(KeyOrder::new(|j: &Job| j.priority, Min));
/// jobs.insert(Job { priority: 3, name: "flush" })
///     .insert(Job { priority: 1, name: "accept" });
/// assert_eq!(jobs.extract().unwrap().name, "accept");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyOrder<F, S> {
    key: F,
    sense: S,
}

impl<F, S> KeyOrder<F, S> {
    /// Creates a strategy comparing `key(a)` against `key(b)` with `sense`.
    pub const fn new(key: F, sense: S) -> Self {
        Self { key, sense }
    }
}

impl<T, K, F, S> HeapOrder<T> for KeyOrder<F, S>
where
    F: Fn(&T) -> K,
    S: HeapOrder<K>,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.sense.precedes(&(self.key)(a), &(self.key)(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_accepts_equal() {
        assert!(Max.precedes(&5, &3));
        assert!(Max.precedes(&4, &4));
        assert!(!Max.precedes(&3, &5));
    }

    #[test]
    fn min_accepts_equal() {
        assert!(Min.precedes(&3, &5));
        assert!(Min.precedes(&4, &4));
        assert!(!Min.precedes(&5, &3));
    }

    #[test]
    fn unsized_str() {
        assert!(Min.precedes("apple", "banana"));
        assert!(Max.precedes("banana", "apple"));
    }

    #[test]
    fn fn_order_delegates() {
        let even_first = FnOrder(|a: &u32, b: &u32| a % 2 <= b % 2);
        assert!(even_first.precedes(&4, &3));
        assert!(!even_first.precedes(&3, &4));
    }

    #[test]
    fn key_order_uses_key() {
        let by_len = KeyOrder::new(|s: &&str| s.len(), Max);
        assert!(by_len.precedes(&"longer", &"short"));
        assert!(!by_len.precedes(&"a", &"bb"));
    }

    #[test]
    fn reference_forwards() {
        let order = &Min;
        assert!(order.precedes(&1, &2));
    }
}
