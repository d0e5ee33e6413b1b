//! Sorter Module
//!
//! Orders records by price and measures how long that takes.
//!
//! ## Responsibilities
//! - Bubble sort by price, in place, ascending, stable
//! - Time a sort on a dataset as given, then on a shuffled copy
//! - Generate synthetic datasets in three shapes for comparison
//!
//! ## No Early Exit
//! The sort always runs the full `n(n-1)/2` comparisons, even on input that
//! is already ordered. Timings across input shapes rely on this.
//!
//! ```text
//!   Dataset ──► measure() ──► sort as given ──► shuffle ──► sort again
//!                                  │                            │
//!                                  ▼                            ▼
//!                              Duration                     Duration
//! ```

mod bubble;
mod measure;
mod dataset;
mod benchmark;

pub use bubble::{bubble_sort, bubble_sort_by, timed_sort, SortStats};
pub use measure::{measure, Measurement};
pub use dataset::{generate, generate_all, DatasetShape, MAX_PRICE, MIN_PRICE};
pub use benchmark::{Benchmark, BenchmarkReport};
