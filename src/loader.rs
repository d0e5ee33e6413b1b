//! Loader
//!
//! Populates a Store from a flat text file.
//!
//! ## File Format
//! ```text
//! 1, Desk Lamp, 24.5, Lighting
//! 2, Office Chair, 149.99, Furniture
//! ```
//! - Fields separated by `", "` (comma + space), no header, no escaping
//! - Exactly four fields: id (integer), name, price (float), category
//! - Blank lines are skipped
//!
//! A missing or unreadable file is an error; a malformed line is reported in
//! the `LoadReport` and, depending on `LoadMode`, either stops the load or is
//! skipped. Records parsed before a failure always stay in the store.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::record::Record;
use crate::store::Store;

/// Field separator within a line
pub const FIELD_DELIMITER: &str = ", ";

/// Number of fields on every line
pub const FIELD_COUNT: usize = 4;

/// How to react to a malformed line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Stop at the first malformed line, keeping what was loaded before it
    #[default]
    StopAtFirstError,

    /// Report malformed lines and keep going
    SkipMalformed,
}

/// Outcome of a load that managed to open its input
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records appended to the store
    pub loaded: usize,

    /// Malformed lines encountered (at most one with `StopAtFirstError`)
    pub errors: Vec<CatalogError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Load records from the file at `path` into `store`
pub fn load_file(path: &Path, mode: LoadMode, store: &mut Store) -> Result<LoadReport> {
    let file = File::open(path)?;
    tracing::debug!("Loading records from {}", path.display());
    load_from_reader(BufReader::new(file), mode, store)
}

/// Load records from any buffered reader into `store`
///
/// A line that is not valid UTF-8 counts as malformed.
pub fn load_from_reader<R: BufRead>(mut reader: R, mode: LoadMode, store: &mut Store) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let parsed = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_line(line_no, line),
            Err(e) => Err(CatalogError::MalformedLine {
                line: line_no,
                reason: format!("not valid UTF-8: {}", e),
            }),
        };

        match parsed {
            Ok(record) => {
                store.insert(record);
                report.loaded += 1;
            }
            Err(e) => {
                tracing::warn!("{}", e);
                report.errors.push(e);
                if mode == LoadMode::StopAtFirstError {
                    break;
                }
            }
        }
    }

    tracing::info!(
        loaded = report.loaded,
        malformed = report.errors.len(),
        "Load finished"
    );

    Ok(report)
}

/// Parse one line of the data file
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> Result<Record> {
    let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();

    if fields.len() != FIELD_COUNT {
        return Err(CatalogError::MalformedLine {
            line: line_no,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    }

    let id = fields[0].trim().parse::<i64>().map_err(|e| CatalogError::MalformedLine {
        line: line_no,
        reason: format!("invalid id {:?}: {}", fields[0], e),
    })?;

    let price = fields[2].trim().parse::<f64>().map_err(|e| CatalogError::MalformedLine {
        line: line_no,
        reason: format!("invalid price {:?}: {}", fields[2], e),
    })?;

    Ok(Record::new(id, fields[1], price, fields[3]))
}
