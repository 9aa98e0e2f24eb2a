//! I/O module
//!
//! Handles QIF line reading and CSV output.
//!
//! # Components
//!
//! - `line_source` - Streaming line reader with one line of pushback
//! - `csv_format` - CSV output for totals and account definitions

pub mod csv_format;
pub mod line_source;

pub use csv_format::{write_accounts_csv, write_totals_csv};
pub use line_source::LineSource;
