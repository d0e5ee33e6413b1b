//! Catalog Binary
//!
//! Loads the data file, runs the sorting benchmark, then starts the menu.

use std::io::{self, Write};
use std::path::PathBuf;

use catalog::loader::{self, LoadMode};
use catalog::sorter::Benchmark;
use catalog::{Config, Shell, Store};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, EnvFilter};

/// Product catalog manager
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "In-memory product catalog with a bubble sort timing harness")]
#[command(version)]
struct Args {
    /// Data file, one `id, name, price, category` record per line
    #[arg(short = 'f', long, default_value = "product_data.txt")]
    data_file: PathBuf,

    /// Records per generated benchmark dataset
    #[arg(short = 's', long, default_value = "1000")]
    bench_size: usize,

    /// Skip the startup benchmark
    #[arg(long)]
    no_bench: bool,

    /// Seed for dataset generation and shuffling
    #[arg(long)]
    seed: Option<u64>,

    /// Skip malformed lines instead of stopping at the first one
    #[arg(long)]
    skip_malformed: bool,
}

fn main() {
    // Logs go to stderr so the menu on stdout stays readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,catalog=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Catalog v{}", catalog::VERSION);
    tracing::info!("Data file: {}", args.data_file.display());

    let load_mode = if args.skip_malformed {
        LoadMode::SkipMalformed
    } else {
        LoadMode::StopAtFirstError
    };

    let config = Config::builder()
        .data_file(&args.data_file)
        .load_mode(load_mode)
        .bench_size(args.bench_size)
        .run_benchmark(!args.no_bench)
        .seed(args.seed)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(config) {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> catalog::Result<()> {
    let mut store = Store::new();

    match loader::load_file(&config.data_file, config.load_mode, &mut store) {
        Ok(report) => {
            for error in &report.errors {
                println!("Error loading data: {}", error);
            }
        }
        Err(e) if e.is_not_found() => {
            println!("File '{}' not found.", config.data_file.display());
        }
        Err(e) => {
            println!("Error loading data: {}", e);
        }
    }

    if config.run_benchmark {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let report = Benchmark::new(config.bench_size).run(&mut rng);

        let mut stdout = io::stdout().lock();
        report.write_to(&mut stdout)?;
        stdout.flush()?;
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let mut shell = Shell::new(store, stdin, stdout);
    shell.run()
}
