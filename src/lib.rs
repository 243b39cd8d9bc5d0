//! # Eytzinger Layout for Sorted Lookup Tables
//!
//! This library rearranges a sorted table (typically Unicode grapheme-break
//! ranges) into Eytzinger order so that lookups can run as a branch-free,
//! cache-friendly descent instead of a classic binary search.
//!
//! ## Core Algorithm
//!
//! 1. **Implicit tree**: slot k has children 2k and 2k + 1, root at slot 1
//! 2. **In-order walk**: visit left subtree, node, right subtree
//! 3. **Placement**: the i-th visited slot receives the i-th smallest record
//! 4. **Placeholder**: slot 0 is unused and holds a sentinel value
//!
//! Result: `n` records occupy `n + 1` slots, built in O(n) time with O(log n)
//! traversal state.
//!
//! ## Usage Example
//!
//! ```
//! use eytzinger_layout::{build, EytzingerLayout};
//!
//! assert_eq!(build(&[1, 2, 3, 4, 5]), vec![0, 4, 2, 5, 1, 3]);
//!
//! let layout = EytzingerLayout::new(&["a", "b", "c"], "-");
//! assert_eq!(layout.slots(), &["-", "b", "a", "c"]);
//! assert_eq!(layout.rank_of(1), Some(1));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod layout;  // Eytzinger placement and implicit tree navigation
pub mod records; // Line-oriented record files
pub mod driver;  // File-to-file pipeline

// Re-exports for convenience
pub use layout::{build, build_with_placeholder, build_with_strategy, EytzingerLayout, HeapNode, Strategy};
pub use records::{Placeholder, RecordError};
pub use driver::{run, DriverConfig, DriverError, LayoutSummary};
