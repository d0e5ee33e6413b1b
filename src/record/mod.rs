//! Record Module
//!
//! One catalog entry and the closed set of attributes it can be searched by.
//!
//! ## Display Format
//! ```text
//! ID: 1, Name: Desk Lamp, Price: 24.5, Category: Lighting
//! ```
//!
//! Prices always print with a fractional part (`10.0`, never `10`) so the
//! textual form a user types matches the textual form search compares.

mod field;

pub use field::SearchField;

use std::fmt;

/// A single product in the catalog
///
/// Ids are expected to be unique but nothing enforces it; id-keyed
/// operations on the store decide how duplicates are treated.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Record {
    /// Create a new record
    pub fn new(id: i64, name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    /// Textual form of the price
    pub fn price_text(&self) -> String {
        format_price(self.price)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Price: {}, Category: {}",
            self.id,
            self.name,
            self.price_text(),
            self.category
        )
    }
}

/// Format a price the way it is displayed and searched
///
/// `{:?}` on f64 keeps the trailing `.0` on integral values.
pub fn format_price(price: f64) -> String {
    format!("{:?}", price)
}
