//! Interactive session
//!
//! Reads menu choices and prompts, runs commands against the store, and
//! writes results.

use std::io::{BufRead, Write};

use crate::error::{CatalogError, Result};
use crate::record::Record;
use crate::store::{DeleteOutcome, Store, UpdateOutcome};

use super::{Command, MenuChoice};

const INSERT_REJECTED: &str = "Invalid input. Please enter numeric values for Product ID and Price.";
const UPDATE_REJECTED: &str = "Invalid input. Please enter numeric values for Product ID and New Price.";
const DELETE_REJECTED: &str = "Invalid input. Please enter numeric values for Product ID.";

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Menu-driven session over a Store
pub struct Shell<R, W> {
    /// The catalog being edited
    store: Store,

    /// Source of menu choices and prompt answers
    input: R,

    /// Where menus, prompts and results go
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a new shell over `store`
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self { store, input, output }
    }

    /// Run the menu loop until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.write_menu()?;

            let Some(line) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("Input closed, leaving menu");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                continue;
            };

            let command = match self.read_command(choice) {
                Ok(Some(command)) => command,
                Ok(None) => {
                    tracing::debug!("Input closed mid-prompt, leaving menu");
                    return Ok(());
                }
                Err(CatalogError::InvalidInput(message)) => {
                    tracing::debug!(?choice, "Rejected input");
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if self.execute(command)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Run one command against the store and write its result
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Display => {
                writeln!(self.output, "\nDisplaying Products:")?;
                self.write_records()?;
            }
            Command::Insert(record) => {
                self.store.insert(record);
                writeln!(self.output, "Product added successfully.")?;
            }
            Command::UpdatePrice { id, price } => match self.store.update_price(id, price) {
                UpdateOutcome::Updated => {
                    writeln!(self.output, "Product price updated successfully.")?;
                }
                UpdateOutcome::NotFound => {
                    writeln!(self.output, "No product found with ID {}.", id)?;
                }
            },
            Command::Delete { id } => match self.store.delete(id) {
                DeleteOutcome::Deleted { .. } => {
                    writeln!(self.output, "Product deleted successfully.")?;
                }
                DeleteOutcome::NotFound => {
                    writeln!(self.output, "No product found with ID {}.", id)?;
                }
            },
            Command::Search { key, value } => match self.store.search_by_key(&key, &value) {
                Ok(results) if results.is_empty() => {
                    writeln!(self.output, "No matching products found.")?;
                }
                Ok(results) => {
                    writeln!(self.output, "\nSearch Results:")?;
                    for record in results {
                        writeln!(self.output, "{}", record)?;
                    }
                }
                Err(CatalogError::InvalidSearchKey(key)) => {
                    writeln!(self.output, "Invalid search key: {}", key)?;
                }
                Err(e) => return Err(e),
            },
            Command::Sort => {
                let elapsed = self.store.sort_by_price();
                writeln!(
                    self.output,
                    "Time taken to sort products: {:.6} seconds",
                    elapsed.as_secs_f64()
                )?;
                writeln!(self.output, "\nProducts Sorted by Price (Bubble Sort):")?;
                self.write_records()?;
            }
            Command::Exit => {
                writeln!(self.output, "Successfully exited the program.")?;
                self.output.flush()?;
                return Ok(Flow::Exit);
            }
        }

        self.output.flush()?;
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The store in its current state
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consume the shell and return the store
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Consume the shell and return the store and output sink
    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.output)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Collect whatever the chosen entry needs from the user
    ///
    /// `Ok(None)` means input ended before the command was complete.
    fn read_command(&mut self, choice: MenuChoice) -> Result<Option<Command>> {
        let command = match choice {
            MenuChoice::Display => Command::Display,
            MenuChoice::Insert => {
                let Some(id) = self.prompt("Enter Product ID: ")? else { return Ok(None) };
                let id = parse_id(&id, INSERT_REJECTED)?;
                let Some(name) = self.prompt("Enter Product Name: ")? else { return Ok(None) };
                let Some(price) = self.prompt("Enter Product Price: ")? else { return Ok(None) };
                let price = parse_price(&price, INSERT_REJECTED)?;
                let Some(category) = self.prompt("Enter Product Category: ")? else { return Ok(None) };
                Command::Insert(Record::new(id, name, price, category))
            }
            MenuChoice::UpdatePrice => {
                let Some(id) = self.prompt("Enter Product ID to update price: ")? else { return Ok(None) };
                let id = parse_id(&id, UPDATE_REJECTED)?;
                let Some(price) = self.prompt("Enter New Price: ")? else { return Ok(None) };
                let price = parse_price(&price, UPDATE_REJECTED)?;
                Command::UpdatePrice { id, price }
            }
            MenuChoice::Delete => {
                let Some(id) = self.prompt("Enter Product ID to delete: ")? else { return Ok(None) };
                Command::Delete { id: parse_id(&id, DELETE_REJECTED)? }
            }
            MenuChoice::Search => {
                let Some(key) = self.prompt("Enter Search Key (e.g., Name): ")? else { return Ok(None) };
                let key = key.trim().to_lowercase();
                let prompt = format!("Enter {} to search: ", capitalize(&key));
                let Some(value) = self.prompt(&prompt)? else { return Ok(None) };
                Command::Search { key, value }
            }
            MenuChoice::Sort => Command::Sort,
            MenuChoice::Exit => Command::Exit,
        };

        Ok(Some(command))
    }

    /// Write `text` and read one line, without its line ending
    ///
    /// `Ok(None)` on end of input. Bytes that are not UTF-8 become U+FFFD,
    /// so they fail parsing like any other bad answer.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nMenu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice as u8, choice.label())?;
        }
        Ok(())
    }

    fn write_records(&mut self) -> Result<()> {
        for record in self.store.iter() {
            writeln!(self.output, "{}", record)?;
        }
        Ok(())
    }
}

fn parse_id(text: &str, rejection: &str) -> Result<i64> {
    text.trim()
        .parse()
        .map_err(|_| CatalogError::InvalidInput(rejection.to_string()))
}

fn parse_price(text: &str, rejection: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| CatalogError::InvalidInput(rejection.to_string()))
}

/// First letter upper-cased, the rest lower-cased
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
