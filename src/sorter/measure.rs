//! Two-phase timing of the bubble sort

use std::fmt;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::record::Record;

use super::timed_sort;

/// Elapsed time of both phases of `measure`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Number of records sorted in each phase
    pub records: usize,

    /// Sorting the dataset in the order it was handed over
    pub as_given: Duration,

    /// Sorting the same records after a random shuffle
    pub shuffled: Duration,
}

/// Time a sort of `records` as given, shuffle, and time a second sort
///
/// `records` is left sorted by price.
pub fn measure<R>(records: &mut [Record], rng: &mut R) -> Measurement
where
    R: Rng + ?Sized,
{
    let as_given = timed_sort(records);

    records.shuffle(rng);

    let shuffled = timed_sort(records);

    Measurement {
        records: records.len(),
        as_given,
        shuffled,
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Time taken to sort data as given: {:.6} seconds",
            self.as_given.as_secs_f64()
        )?;
        write!(
            f,
            "Time taken to sort shuffled data: {:.6} seconds",
            self.shuffled.as_secs_f64()
        )
    }
}
