//! Startup benchmark driver
//!
//! Runs `measure` over one dataset of each shape and collects the results.

use std::io::{self, Write};

use rand::Rng;

use super::{generate_all, measure, DatasetShape, Measurement};

/// Benchmark over generated datasets of a fixed size
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    size: usize,
}

/// Measurements for every dataset shape, in run order
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub entries: Vec<(DatasetShape, Measurement)>,
}

impl Benchmark {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Generate the datasets and time each one
    pub fn run<R>(&self, rng: &mut R) -> BenchmarkReport
    where
        R: Rng + ?Sized,
    {
        let mut entries = Vec::with_capacity(DatasetShape::ALL.len());

        for (shape, mut records) in generate_all(self.size, rng) {
            let measurement = measure(&mut records, rng);
            tracing::info!(
                shape = %shape,
                records = measurement.records,
                as_given_s = measurement.as_given.as_secs_f64(),
                shuffled_s = measurement.shuffled.as_secs_f64(),
                "Benchmark dataset measured"
            );
            entries.push((shape, measurement));
        }

        BenchmarkReport { entries }
    }
}

impl BenchmarkReport {
    /// Measurement for a given shape, if it was run
    pub fn get(&self, shape: DatasetShape) -> Option<&Measurement> {
        self.entries
            .iter()
            .find(|(s, _)| *s == shape)
            .map(|(_, m)| m)
    }

    /// Print the report in the form shown at startup
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (shape, measurement) in &self.entries {
            writeln!(
                out,
                "\nAnalyzing Sorting Complexity (Bubble Sort, {} data, {} records):",
                shape, measurement.records
            )?;
            writeln!(out, "{}", measurement)?;
        }
        Ok(())
    }
}
