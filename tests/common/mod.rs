#![allow(dead_code)]

use eytzinger_layout::EytzingerLayout;

/// Slot of the first record not less than `key`, found by the branch-free
/// descent k → 2k + (slots[k] < key).
///
/// Returns 0 (the placeholder slot) when every record is less than `key`.
pub fn eytzinger_lower_bound<T, K, F>(slots: &[T], key: &K, less: F) -> usize
where
    F: Fn(&T, &K) -> bool,
{
    let n = slots.len() - 1;
    let mut k = 1usize;
    while k <= n {
        k = 2 * k + usize::from(less(&slots[k], key));
    }
    // Undo the trailing run of right turns plus the final left turn
    k >> (k.trailing_ones() + 1)
}

/// Sorted rank of the first record not less than `key`, looked up through
/// the layout; `layout.len()` when there is none.
pub fn lower_bound_rank<T: Ord>(layout: &EytzingerLayout<T>, key: &T) -> usize {
    let slot = eytzinger_lower_bound(layout.slots(), key, |record, key| record < key);
    layout.ranks()[slot]
}

/// `[1, 2, ..., n]`
pub fn one_to(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

/// Owned lines from string literals
pub fn lines(records: &[&str]) -> Vec<String> {
    records.iter().map(|r| r.to_string()).collect()
}
