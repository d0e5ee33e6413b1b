//! Shell Module
//!
//! Numbered text menu over a Store.
//!
//! ## Menu
//! ```text
//! 1. Display Products
//! 2. Insert Product
//! 3. Update Product Price
//! 4. Delete Product
//! 5. Search Products
//! 6. Sort Products by Price (Bubble Sort)
//! 7. Exit
//! ```
//!
//! The shell is generic over its input and output so a whole session can be
//! driven from a byte buffer. Bad numeric input aborts the current operation
//! only; the loop ends on Exit or end of input.

mod command;
mod session;

pub use command::{Command, MenuChoice};
pub use session::{Flow, Shell};
