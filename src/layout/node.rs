//! Implicit heap node representation
//!
//! Node = 1-based position k in the output slots
//! Children computed arithmetically:
//!   Left child: 2k
//!   Right child: 2k + 1

/// Tree node (implicit - just a heap position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeapNode(usize);

impl HeapNode {
    /// Root of every layout, position 1
    pub const ROOT: HeapNode = HeapNode(1);

    /// Wrap a raw heap position.
    ///
    /// Position 0 is the placeholder slot and is never a tree node.
    pub fn new(position: usize) -> Option<Self> {
        (position > 0).then_some(Self(position))
    }

    /// Raw heap position (index into the output slots)
    #[inline]
    pub fn position(&self) -> usize {
        self.0
    }

    /// Left child at 2k
    #[inline]
    pub fn left(&self) -> HeapNode {
        HeapNode(2 * self.0)
    }

    /// Right child at 2k + 1
    #[inline]
    pub fn right(&self) -> HeapNode {
        HeapNode(2 * self.0 + 1)
    }

    /// Parent at ⌊k / 2⌋, `None` for the root
    #[inline]
    pub fn parent(&self) -> Option<HeapNode> {
        Self::new(self.0 / 2)
    }

    /// Whether this position holds a record in a layout of `len` records
    #[inline]
    pub fn is_present(&self, len: usize) -> bool {
        self.0 <= len
    }

    /// Distance from the root (root = 0)
    pub fn depth(&self) -> usize {
        (usize::BITS - 1 - self.0.leading_zeros()) as usize
    }
}

/// Number of levels in the implicit tree holding `len` records.
///
/// Equals ⌊log2 len⌋ + 1, and 0 for an empty layout.
pub fn tree_height(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}
