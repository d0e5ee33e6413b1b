//! Command definitions
//!
//! Represents menu selections and the operations they resolve to.

use crate::record::Record;

/// Menu entries, numbered as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Display = 1,
    Insert = 2,
    UpdatePrice = 3,
    Delete = 4,
    Search = 5,
    Sort = 6,
    Exit = 7,
}

impl MenuChoice {
    /// All entries, in display order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Display,
        MenuChoice::Insert,
        MenuChoice::UpdatePrice,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::Sort,
        MenuChoice::Exit,
    ];

    /// Parse the text typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Display),
            "2" => Some(MenuChoice::Insert),
            "3" => Some(MenuChoice::UpdatePrice),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Search),
            "6" => Some(MenuChoice::Sort),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Display => "Display Products",
            MenuChoice::Insert => "Insert Product",
            MenuChoice::UpdatePrice => "Update Product Price",
            MenuChoice::Delete => "Delete Product",
            MenuChoice::Search => "Search Products",
            MenuChoice::Sort => "Sort Products by Price (Bubble Sort)",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// A fully parsed operation, ready to run against the store
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// List every record
    Display,

    /// Append a record
    Insert(Record),

    /// Change the price of the first record with `id`
    UpdatePrice { id: i64, price: f64 },

    /// Remove every record with `id`
    Delete { id: i64 },

    /// Case-insensitive match of `value` against the attribute named `key`
    Search { key: String, value: String },

    /// Bubble sort the store by price
    Sort,

    /// Leave the menu loop
    Exit,
}

impl Command {
    /// The menu entry this command belongs to
    pub fn menu_choice(&self) -> MenuChoice {
        match self {
            Command::Display => MenuChoice::Display,
            Command::Insert(_) => MenuChoice::Insert,
            Command::UpdatePrice { .. } => MenuChoice::UpdatePrice,
            Command::Delete { .. } => MenuChoice::Delete,
            Command::Search { .. } => MenuChoice::Search,
            Command::Sort => MenuChoice::Sort,
            Command::Exit => MenuChoice::Exit,
        }
    }
}
