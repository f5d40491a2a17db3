//! Error types for heap validation.

use core::fmt;

/// A parent/child pair that breaks the heap property.
///
/// Returned by [`Heap::validate`](crate::Heap::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapViolation {
    /// Storage index of the parent.
    pub parent: usize,
    /// Storage index of the child the parent fails to precede.
    pub child: usize,
}

impl fmt::Display for HeapViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heap order violated: index {} does not precede child {}",
            self.parent, self.child
        )
    }
}

impl std::error::Error for HeapViolation {}
