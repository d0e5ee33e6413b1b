//! Dataset Generator Tests

use catalog::sorter::{generate, generate_all, DatasetShape, MAX_PRICE, MIN_PRICE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_generate_size_and_naming() {
    let mut rng = StdRng::seed_from_u64(10);

    let records = generate(DatasetShape::Random, 25, &mut rng);

    assert_eq!(records.len(), 25);
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=25).collect::<Vec<i64>>());
    assert_eq!(records[0].name, "Product 1");
    assert_eq!(records[24].category, "Category 25");
}

#[test]
fn test_generate_prices_in_range() {
    let mut rng = StdRng::seed_from_u64(11);

    for shape in DatasetShape::ALL {
        let records = generate(shape, 300, &mut rng);
        assert!(records.iter().all(|r| r.price >= MIN_PRICE && r.price < MAX_PRICE));
    }
}

#[test]
fn test_sorted_shape_is_ascending() {
    let mut rng = StdRng::seed_from_u64(12);

    let records = generate(DatasetShape::Sorted, 100, &mut rng);

    assert!(records.windows(2).all(|w| w[0].price <= w[1].price));
    assert!(records.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn test_reverse_shape_is_descending() {
    let mut rng = StdRng::seed_from_u64(13);

    let records = generate(DatasetShape::ReverseSorted, 100, &mut rng);

    assert!(records.windows(2).all(|w| w[0].price >= w[1].price));
    assert_eq!(records.first().map(|r| r.id), Some(100));
    assert_eq!(records.last().map(|r| r.id), Some(1));
}

#[test]
fn test_generate_zero_size() {
    let mut rng = StdRng::seed_from_u64(14);

    assert!(generate(DatasetShape::Sorted, 0, &mut rng).is_empty());
}

#[test]
fn test_same_seed_same_dataset() {
    let a = generate(DatasetShape::Random, 50, &mut StdRng::seed_from_u64(15));
    let b = generate(DatasetShape::Random, 50, &mut StdRng::seed_from_u64(15));

    assert_eq!(a, b);
}

#[test]
fn test_generate_all_order() {
    let mut rng = StdRng::seed_from_u64(16);

    let datasets = generate_all(10, &mut rng);

    let shapes: Vec<DatasetShape> = datasets.iter().map(|(s, _)| *s).collect();
    assert_eq!(
        shapes,
        vec![DatasetShape::Random, DatasetShape::Sorted, DatasetShape::ReverseSorted]
    );
    assert!(datasets.iter().all(|(_, records)| records.len() == 10));
}

#[test]
fn test_shape_names() {
    assert_eq!(DatasetShape::Random.to_string(), "random");
    assert_eq!(DatasetShape::Sorted.to_string(), "sorted");
    assert_eq!(DatasetShape::ReverseSorted.to_string(), "reverse-sorted");
}
