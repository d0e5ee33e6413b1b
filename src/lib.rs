//! # Catalog
//!
//! An in-memory product catalog with:
//! - One-shot load from a flat `id, name, price, category` text file
//! - Insert / update price / delete / search over an ordered record list
//! - In-place bubble sort by price with wall-clock timing
//! - A benchmark comparing sort cost on random, sorted and reverse-sorted data
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Interactive Shell                        │
//! │               (numbered menu over stdin/stdout)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Loader    │─────────►│    Store    │
//!   │ (text file) │  insert  │  (Vec scan) │
//!   └─────────────┘          └──────┬──────┘
//!                                   │ sort_by_price
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   Sorter    │
//!                           │ (bubble +   │
//!                           │  timing)    │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod sorter;
pub mod loader;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CatalogError, Result};
pub use config::Config;
pub use record::{Record, SearchField};
pub use store::{DeleteOutcome, Store, UpdateOutcome};
pub use loader::{LoadMode, LoadReport};
pub use shell::Shell;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the catalog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
