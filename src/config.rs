//! Configuration for the catalog
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{CatalogError, Result};
use crate::loader::LoadMode;

/// Main configuration for a catalog session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Load Configuration
    // -------------------------------------------------------------------------
    /// Flat text file the store is populated from at startup.
    /// One record per line: `id, name, price, category`
    pub data_file: PathBuf,

    /// What to do when a line fails to parse
    pub load_mode: LoadMode,

    // -------------------------------------------------------------------------
    // Benchmark Configuration
    // -------------------------------------------------------------------------
    /// Number of records in each generated benchmark dataset
    pub bench_size: usize,

    /// Run the sorting benchmark before entering the menu
    pub run_benchmark: bool,

    /// RNG seed for dataset generation and shuffling (random if unset)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("product_data.txt"),
            load_mode: LoadMode::StopAtFirstError,
            bench_size: 1000,
            run_benchmark: true,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the settings can be acted on
    pub fn validate(&self) -> Result<()> {
        if self.run_benchmark && self.bench_size == 0 {
            return Err(CatalogError::Config(
                "benchmark size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file loaded at startup
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set how malformed lines are handled
    pub fn load_mode(mut self, mode: LoadMode) -> Self {
        self.config.load_mode = mode;
        self
    }

    /// Set the benchmark dataset size
    pub fn bench_size(mut self, size: usize) -> Self {
        self.config.bench_size = size;
        self
    }

    /// Enable or disable the startup benchmark
    pub fn run_benchmark(mut self, enabled: bool) -> Self {
        self.config.run_benchmark = enabled;
        self
    }

    /// Seed the RNG
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
