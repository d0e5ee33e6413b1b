//! Store Module
//!
//! The in-memory, ordered collection of catalog records.
//!
//! ## Responsibilities
//! - Own every record; callers only ever borrow
//! - Preserve insertion order until explicitly sorted
//! - Insert, update price, delete, search, enumerate
//! - Sort the live sequence by price in place
//!
//! ## Data Structure Choice
//! A plain `Vec<Record>` scanned linearly:
//! - Order matters (display, stable sort, first-match updates)
//! - Ids are not unique, so a keyed map would not fit
//! - Datasets are small enough that a scan is the whole cost model

mod table;

pub use table::Store;

/// Result of `Store::update_price`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The first record with the id now has the new price
    Updated,

    /// No record has the id; nothing changed
    NotFound,
}

/// Result of `Store::delete`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Every record with the id was removed
    Deleted { removed: usize },

    /// No record has the id; nothing changed
    NotFound,
}

impl UpdateOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }
}

impl DeleteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }
}
