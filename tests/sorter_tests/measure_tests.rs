//! Measurement Harness Tests
//!
//! Timings depend on the machine, so these only check what the harness
//! leaves behind: a sorted, complete dataset and a well-formed report.

use std::collections::BTreeSet;

use catalog::record::Record;
use catalog::sorter::{generate, measure, Benchmark, DatasetShape};
use rand::rngs::StdRng;
use rand::SeedableRng;

// =============================================================================
// measure() Tests
// =============================================================================

#[test]
fn test_measure_leaves_records_sorted() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut records = generate(DatasetShape::Random, 200, &mut rng);

    let measurement = measure(&mut records, &mut rng);

    assert_eq!(measurement.records, 200);
    assert!(records.windows(2).all(|w| w[0].price <= w[1].price));
}

#[test]
fn test_measure_keeps_every_record() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut records = generate(DatasetShape::ReverseSorted, 100, &mut rng);
    let before: BTreeSet<i64> = records.iter().map(|r| r.id).collect();

    measure(&mut records, &mut rng);

    let after: BTreeSet<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(records.len(), 100);
    assert_eq!(before, after);
}

#[test]
fn test_measure_empty_dataset() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut records: Vec<Record> = Vec::new();

    let measurement = measure(&mut records, &mut rng);

    assert_eq!(measurement.records, 0);
}

#[test]
fn test_measurement_display() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut records = generate(DatasetShape::Sorted, 10, &mut rng);

    let text = measure(&mut records, &mut rng).to_string();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Time taken to sort data as given: "));
    assert!(lines[1].starts_with("Time taken to sort shuffled data: "));
    assert!(lines.iter().all(|l| l.ends_with(" seconds")));
}

// =============================================================================
// Benchmark Tests
// =============================================================================

#[test]
fn test_benchmark_runs_every_shape_in_order() {
    let mut rng = StdRng::seed_from_u64(5);

    let report = Benchmark::new(50).run(&mut rng);

    let shapes: Vec<DatasetShape> = report.entries.iter().map(|(s, _)| *s).collect();
    assert_eq!(shapes, DatasetShape::ALL.to_vec());
    assert!(report.entries.iter().all(|(_, m)| m.records == 50));
    assert!(report.get(DatasetShape::Sorted).is_some());
}

#[test]
fn test_benchmark_report_output() {
    let mut rng = StdRng::seed_from_u64(6);
    let report = Benchmark::new(20).run(&mut rng);

    let mut out = Vec::new();
    report.write_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Analyzing Sorting Complexity (Bubble Sort, random data, 20 records):"));
    assert!(text.contains("Analyzing Sorting Complexity (Bubble Sort, sorted data, 20 records):"));
    assert!(text.contains("Analyzing Sorting Complexity (Bubble Sort, reverse-sorted data, 20 records):"));
    assert_eq!(text.matches("Time taken to sort").count(), 6);
}
