//! In-order traversal of the implicit heap tree
//!
//! Visiting heap positions left subtree → node → right subtree yields them in
//! sorted-rank order: the i-th position visited is where the i-th smallest
//! record belongs.
//! Positions past `len` are absent subtrees and contribute nothing, so
//! non-power-of-two sizes need no special casing.

use super::node::{tree_height, HeapNode};

/// Recursive in-order visit of the subtree rooted at `node`.
///
/// Stack depth: O(log len)
pub fn visit<F>(node: HeapNode, len: usize, emit: &mut F)
where
    F: FnMut(HeapNode),
{
    if !node.is_present(len) {
        return;
    }

    visit(node.left(), len, emit);
    emit(node);
    visit(node.right(), len, emit);
}

/// Explicit-stack in-order traversal
///
/// Yields exactly the sequence `visit(HeapNode::ROOT, ..)` emits, without
/// growing the call stack.
/// Pending stack never holds more than `tree_height(len)` nodes.
#[derive(Debug, Clone)]
pub struct InOrderPositions {
    /// Number of records in the layout
    len: usize,

    /// Ancestors whose left subtree is still being walked
    pending: Vec<HeapNode>,

    /// Subtree to descend into before popping again
    cursor: Option<HeapNode>,

    /// Positions not yet yielded
    remaining: usize,
}

impl InOrderPositions {
    /// Start a traversal of a layout holding `len` records
    pub fn new(len: usize) -> Self {
        Self {
            len,
            pending: Vec::with_capacity(tree_height(len)),
            cursor: Some(HeapNode::ROOT),
            remaining: len,
        }
    }

    /// Current pending-stack depth
    pub fn depth(&self) -> usize {
        self.pending.len()
    }
}

impl Iterator for InOrderPositions {
    type Item = HeapNode;

    fn next(&mut self) -> Option<HeapNode> {
        let len = self.len;
        let mut cursor = self.cursor.take();

        // Descend along left children until we fall off the tree
        while let Some(node) = cursor.filter(|node| node.is_present(len)) {
            self.pending.push(node);
            cursor = Some(node.left());
        }

        let node = self.pending.pop()?;
        self.cursor = Some(node.right());
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrderPositions {}

impl std::iter::FusedIterator for InOrderPositions {}
