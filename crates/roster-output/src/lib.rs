//! CSV export for the roster grid.
//!
//! Rows arrive already filtered and sorted by the caller; this crate only
//! encodes them. Headers use the human-readable column labels.

mod csv_writer;
mod error;

pub use csv_writer::{EXPORT_FILE_STEM, export_file_name, to_csv, write_csv, write_csv_file};
pub use error::{OutputError, Result};
