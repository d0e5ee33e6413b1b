//! Bubble sort
//!
//! Classic adjacent-swap sort with a fixed number of passes.

use std::time::{Duration, Instant};

use crate::record::Record;

/// Work done by one sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Adjacent pairs compared
    pub comparisons: u64,

    /// Adjacent pairs swapped
    pub swaps: u64,
}

/// Sort `items` in place using `is_greater` as a strict ordering
///
/// Elements are swapped only when `is_greater(left, right)` holds, so
/// elements that compare equal keep their relative order.
///
/// Pass `i` walks `0..n - i - 1`; there is no early exit when a pass makes
/// no swaps, so every input of length `n` costs `n(n-1)/2` comparisons.
pub fn bubble_sort_by<T, F>(items: &mut [T], mut is_greater: F) -> SortStats
where
    F: FnMut(&T, &T) -> bool,
{
    let mut stats = SortStats::default();
    let n = items.len();
    if n < 2 {
        return stats;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            stats.comparisons += 1;
            if is_greater(&items[j], &items[j + 1]) {
                items.swap(j, j + 1);
                stats.swaps += 1;
            }
        }
    }

    stats
}

/// Sort records ascending by price
pub fn bubble_sort(records: &mut [Record]) -> SortStats {
    bubble_sort_by(records, |left, right| left.price > right.price)
}

/// Sort records ascending by price and return how long it took
pub fn timed_sort(records: &mut [Record]) -> Duration {
    let start = Instant::now();
    let stats = bubble_sort(records);
    let elapsed = start.elapsed();

    tracing::debug!(
        records = records.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        elapsed_us = elapsed.as_micros() as u64,
        "Bubble sort finished"
    );

    elapsed
}
