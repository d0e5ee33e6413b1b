//! Store implementation
//!
//! Vec-backed record table with linear scans.

use std::time::Duration;

use crate::error::Result;
use crate::record::{Record, SearchField};
use crate::sorter;

use super::{DeleteOutcome, UpdateOutcome};

/// In-memory catalog of records
#[derive(Debug, Clone, Default)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Store holding `records` in the given order
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Append a record; ids are not checked for uniqueness
    pub fn insert(&mut self, record: Record) {
        tracing::debug!(id = record.id, "Inserting record");
        self.records.push(record);
    }

    /// Append records in iteration order
    pub fn extend<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record>,
    {
        self.records.extend(records);
    }

    /// Set the price of the first record with `id`
    ///
    /// Later records sharing the id are left alone.
    pub fn update_price(&mut self, id: i64, new_price: f64) -> UpdateOutcome {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                tracing::debug!(id, old = record.price, new = new_price, "Price updated");
                record.price = new_price;
                UpdateOutcome::Updated
            }
            None => {
                tracing::debug!(id, "Price update missed");
                UpdateOutcome::NotFound
            }
        }
    }

    /// Remove every record with `id`
    ///
    /// The remaining records keep their relative order.
    pub fn delete(&mut self, id: i64) -> DeleteOutcome {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = before - self.records.len();

        if removed == 0 {
            tracing::debug!(id, "Delete missed");
            DeleteOutcome::NotFound
        } else {
            tracing::debug!(id, removed, "Records deleted");
            DeleteOutcome::Deleted { removed }
        }
    }

    /// Bubble sort the live sequence by price and return the elapsed time
    ///
    /// The new order is permanent.
    pub fn sort_by_price(&mut self) -> Duration {
        let elapsed = sorter::timed_sort(&mut self.records);
        tracing::info!(
            records = self.records.len(),
            elapsed_s = elapsed.as_secs_f64(),
            "Store sorted by price"
        );
        elapsed
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Records whose `field` text equals `value`, ignoring case
    ///
    /// Matches come back in current store order.
    pub fn search(&self, field: SearchField, value: &str) -> Vec<&Record> {
        let needle = value.to_lowercase();
        self.records
            .iter()
            .filter(|r| field.text_of(r).to_lowercase() == needle)
            .collect()
    }

    /// `search` with a free-text key
    ///
    /// Unknown keys are rejected before any record is compared.
    pub fn search_by_key(&self, key: &str, value: &str) -> Result<Vec<&Record>> {
        let field: SearchField = key.parse()?;
        Ok(self.search(field, value))
    }

    /// First record with `id`
    pub fn find(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Record at `index` in current order
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterate over all records in current order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// All records in current order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the store and return its records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
