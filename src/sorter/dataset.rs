//! Synthetic datasets for the timing harness

use std::fmt;

use rand::Rng;

use crate::record::Record;

/// Lowest generated price (inclusive)
pub const MIN_PRICE: f64 = 1.0;

/// Highest generated price (exclusive)
pub const MAX_PRICE: f64 = 1000.0;

/// Order of a generated dataset with respect to price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetShape {
    /// Prices in draw order
    Random,

    /// Ascending by price
    Sorted,

    /// Descending by price
    ReverseSorted,
}

impl DatasetShape {
    /// All shapes, in the order the benchmark runs them
    pub const ALL: [DatasetShape; 3] = [
        DatasetShape::Random,
        DatasetShape::Sorted,
        DatasetShape::ReverseSorted,
    ];
}

impl fmt::Display for DatasetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetShape::Random => f.write_str("random"),
            DatasetShape::Sorted => f.write_str("sorted"),
            DatasetShape::ReverseSorted => f.write_str("reverse-sorted"),
        }
    }
}

/// Generate `size` records with uniformly drawn prices
///
/// Names and categories follow the id: `Product {id}` / `Category {id}`.
/// For `Sorted` ids ascend with price; `ReverseSorted` is that same list
/// reversed.
pub fn generate<R>(shape: DatasetShape, size: usize, rng: &mut R) -> Vec<Record>
where
    R: Rng + ?Sized,
{
    let mut prices: Vec<f64> = (0..size).map(|_| rng.gen_range(MIN_PRICE..MAX_PRICE)).collect();

    if shape != DatasetShape::Random {
        prices.sort_by(f64::total_cmp);
    }

    let mut records: Vec<Record> = prices
        .into_iter()
        .enumerate()
        .map(|(i, price)| {
            let id = i as i64 + 1;
            Record::new(id, format!("Product {}", id), price, format!("Category {}", id))
        })
        .collect();

    if shape == DatasetShape::ReverseSorted {
        records.reverse();
    }

    records
}

/// Generate one dataset of each shape: random, sorted, reverse-sorted
pub fn generate_all<R>(size: usize, rng: &mut R) -> Vec<(DatasetShape, Vec<Record>)>
where
    R: Rng + ?Sized,
{
    DatasetShape::ALL
        .iter()
        .map(|&shape| (shape, generate(shape, size, rng)))
        .collect()
}
