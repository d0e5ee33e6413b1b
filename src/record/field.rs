//! Searchable record attributes
//!
//! Search keys arrive as free text from the shell. They are resolved to a
//! `SearchField` before any record is looked at, so an unknown key is
//! rejected once instead of per record.

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

use super::Record;

/// An attribute of `Record` that search can compare against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Id,
    Name,
    Price,
    Category,
}

impl SearchField {
    /// All searchable fields, in record order
    pub const ALL: [SearchField; 4] = [
        SearchField::Id,
        SearchField::Name,
        SearchField::Price,
        SearchField::Category,
    ];

    /// Textual form of this attribute on `record`
    pub fn text_of(&self, record: &Record) -> String {
        match self {
            SearchField::Id => record.id.to_string(),
            SearchField::Name => record.name.clone(),
            SearchField::Price => record.price_text(),
            SearchField::Category => record.category.clone(),
        }
    }

    /// Canonical key name
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Id => "id",
            SearchField::Name => "name",
            SearchField::Price => "price",
            SearchField::Category => "category",
        }
    }
}

impl FromStr for SearchField {
    type Err = CatalogError;

    /// Case-insensitive; `product_id` is accepted as an alias for `id`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" | "product_id" => Ok(SearchField::Id),
            "name" => Ok(SearchField::Name),
            "price" => Ok(SearchField::Price),
            "category" => Ok(SearchField::Category),
            _ => Err(CatalogError::InvalidSearchKey(s.trim().to_string())),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
