//! Bubble Sort Tests
//!
//! Tests verify:
//! - Output is ascending by price and a permutation of the input
//! - Equal prices keep their relative order
//! - Every input pays the full quadratic comparison count
//! - Edge cases (empty, single, all equal)

use catalog::record::Record;
use catalog::sorter::{bubble_sort, bubble_sort_by, timed_sort, SortStats};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Helper Functions
// =============================================================================

fn random_records(rng: &mut StdRng, len: usize, distinct_prices: u32) -> Vec<Record> {
    (0..len)
        .map(|i| {
            let price = rng.gen_range(0..distinct_prices) as f64 * 0.5;
            Record::new(i as i64, format!("P{}", i), price, "C")
        })
        .collect()
}

/// Reference result: the standard library's stable sort
fn std_stable_sort(records: &[Record]) -> Vec<Record> {
    let mut expected = records.to_vec();
    expected.sort_by(|a, b| a.price.total_cmp(&b.price));
    expected
}

fn full_pass_count(n: u64) -> u64 {
    n * n.saturating_sub(1) / 2
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_sorts_ascending_by_price() {
    let mut records = vec![
        Record::new(1, "A", 30.0, "X"),
        Record::new(2, "B", 10.0, "X"),
        Record::new(3, "C", 20.0, "X"),
    ];

    bubble_sort(&mut records);

    let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_matches_stable_reference_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(7);

    for len in [0usize, 1, 2, 3, 10, 57, 200] {
        let input = random_records(&mut rng, len, 20);
        let expected = std_stable_sort(&input);

        let mut actual = input.clone();
        bubble_sort(&mut actual);

        assert_eq!(actual, expected, "mismatch for length {}", len);
    }
}

#[test]
fn test_stability_with_many_duplicates() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut records = random_records(&mut rng, 120, 3);

    bubble_sort(&mut records);

    for pair in records.windows(2) {
        assert!(pair[0].price <= pair[1].price);
        if pair[0].price == pair[1].price {
            assert!(pair[0].id < pair[1].id, "equal prices reordered");
        }
    }
}

#[test]
fn test_equal_prices_keep_input_order() {
    let mut records = vec![
        Record::new(1, "A", 10.0, "X"),
        Record::new(2, "B", 5.0, "Y"),
        Record::new(3, "C", 5.0, "Z"),
    ];

    bubble_sort(&mut records);

    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

// =============================================================================
// Complexity Tests
// =============================================================================

#[test]
fn test_sorted_input_still_pays_full_passes() {
    let mut records: Vec<Record> = (0..40).map(|i| Record::new(i, "P", i as f64, "C")).collect();

    let stats = bubble_sort(&mut records);

    assert_eq!(stats.comparisons, full_pass_count(40));
    assert_eq!(stats.swaps, 0);
}

#[test]
fn test_reverse_input_swaps_every_pair() {
    let mut records: Vec<Record> = (0..40).map(|i| Record::new(i, "P", (40 - i) as f64, "C")).collect();

    let stats = bubble_sort(&mut records);

    assert_eq!(stats.comparisons, full_pass_count(40));
    assert_eq!(stats.swaps, full_pass_count(40));
}

#[test]
fn test_comparison_count_independent_of_shape() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut records = random_records(&mut rng, 64, 1000);

    let stats = bubble_sort(&mut records);

    assert_eq!(stats.comparisons, full_pass_count(64));
}

// =============================================================================
// Edge Case Tests
// =============================================================================

#[test]
fn test_empty_and_single() {
    let mut empty: Vec<Record> = Vec::new();
    assert_eq!(bubble_sort(&mut empty), SortStats::default());

    let mut single = vec![Record::new(1, "A", 1.0, "X")];
    assert_eq!(bubble_sort(&mut single), SortStats::default());
    assert_eq!(single[0].id, 1);
}

#[test]
fn test_all_equal_prices_untouched() {
    let mut records: Vec<Record> = (0..10).map(|i| Record::new(i, "P", 4.0, "C")).collect();
    let before = records.clone();

    let stats = bubble_sort(&mut records);

    assert_eq!(records, before);
    assert_eq!(stats.swaps, 0);
}

#[test]
fn test_generic_sort_by() {
    let mut values = vec![5, 3, 9, 1, 3];

    bubble_sort_by(&mut values, |a, b| a > b);

    assert_eq!(values, vec![1, 3, 3, 5, 9]);
}

#[test]
fn test_timed_sort_sorts() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut records = random_records(&mut rng, 50, 50);

    let _elapsed = timed_sort(&mut records);

    assert!(records.windows(2).all(|w| w[0].price <= w[1].price));
}
