//! Eytzinger layout builder
//!
//! Rearranges a sorted slice into breadth-first (heap) order: root at slot 1,
//! children of slot k at 2k and 2k + 1, slot 0 left as a placeholder.
//! A lookup then walks k → 2k + (key > slots[k]) with no data-dependent
//! branches.
//!
//! Placement is an in-order walk of the implicit tree: the i-th heap
//! position visited receives input[i].

mod node;
mod traversal;

use std::fmt;

pub use node::{tree_height, HeapNode};
pub use traversal::{visit, InOrderPositions};

/// How the in-order walk over heap positions is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Direct recursion: left subtree, node, right subtree.
    Recursive,

    /// Explicit pending stack, no call-stack growth.
    #[default]
    Iterative,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => f.write_str("recursive"),
            Strategy::Iterative => f.write_str("iterative"),
        }
    }
}

/// Call `place(node, rank)` for every heap position of a `len`-record layout,
/// where `rank` is the input index destined for `node`.
///
/// Ranks arrive as 0, 1, 2, ... each exactly once.
fn for_each_placement<F>(len: usize, strategy: Strategy, mut place: F)
where
    F: FnMut(HeapNode, usize),
{
    match strategy {
        Strategy::Recursive => {
            let mut cursor = 0;
            visit(HeapNode::ROOT, len, &mut |node| {
                place(node, cursor);
                cursor += 1;
            });
            debug_assert_eq!(cursor, len, "traversal must consume every record");
        }
        Strategy::Iterative => {
            for (rank, node) in InOrderPositions::new(len).enumerate() {
                place(node, rank);
            }
        }
    }
}

/// Build the Eytzinger layout of `input`, with `T::default()` in slot 0.
///
/// Output length is always `input.len() + 1`.
pub fn build<T: Clone + Default>(input: &[T]) -> Vec<T> {
    build_with_placeholder(input, T::default())
}

/// Build the Eytzinger layout of `input` with an explicit slot-0 value.
pub fn build_with_placeholder<T: Clone>(input: &[T], placeholder: T) -> Vec<T> {
    build_with_strategy(input, placeholder, Strategy::default())
}

/// Build the Eytzinger layout of `input` using the given traversal strategy.
pub fn build_with_strategy<T: Clone>(input: &[T], placeholder: T, strategy: Strategy) -> Vec<T> {
    let mut slots = vec![placeholder; input.len() + 1];
    for_each_placement(input.len(), strategy, |node, rank| {
        slots[node.position()] = input[rank].clone();
    });
    slots
}

/// Records in Eytzinger order together with their sorted ranks.
///
/// `ranks[k]` is the input index of the record in slot k; slot 0 maps to
/// `len()`, one past the last valid rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EytzingerLayout<T> {
    slots: Vec<T>,
    ranks: Vec<usize>,
}

impl<T: Clone> EytzingerLayout<T> {
    /// Lay out `input` (sorted ascending) using the default strategy.
    pub fn new(input: &[T], placeholder: T) -> Self {
        Self::with_strategy(input, placeholder, Strategy::default())
    }

    /// Lay out `input` (sorted ascending) using `strategy`.
    pub fn with_strategy(input: &[T], placeholder: T, strategy: Strategy) -> Self {
        let len = input.len();
        let mut slots = vec![placeholder; len + 1];
        let mut ranks = vec![len; len + 1];

        for_each_placement(len, strategy, |node, rank| {
            let k = node.position();
            slots[k] = input[rank].clone();
            ranks[k] = rank;
        });

        Self { slots, ranks }
    }
}

impl<T> EytzingerLayout<T> {
    /// Number of records (excludes the placeholder slot)
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    /// True when the layout holds only the placeholder
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of tree levels
    pub fn height(&self) -> usize {
        tree_height(self.len())
    }

    /// All `len() + 1` slots, placeholder first
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// Slots 1..=len(), the records in heap order
    pub fn records(&self) -> &[T] {
        &self.slots[1..]
    }

    /// Value stored in slot 0
    pub fn placeholder(&self) -> &T {
        &self.slots[0]
    }

    /// Slot `k`, including the placeholder at 0
    pub fn get(&self, k: usize) -> Option<&T> {
        self.slots.get(k)
    }

    /// Input index of the record held in slot `k`.
    ///
    /// `None` for the placeholder slot and for positions past the end.
    pub fn rank_of(&self, k: usize) -> Option<usize> {
        if k == 0 {
            return None;
        }
        self.ranks.get(k).copied()
    }

    /// Rank map for every slot; slot 0 holds `len()`
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Records in their original sorted order
    pub fn iter_sorted(&self) -> impl Iterator<Item = &T> + '_ {
        InOrderPositions::new(self.len()).map(move |node| &self.slots[node.position()])
    }

    /// Consume the layout, returning the slots
    pub fn into_slots(self) -> Vec<T> {
        self.slots
    }
}
