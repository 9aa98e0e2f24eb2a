//! qif2csv Library
//! # Overview
//!
//! This library summarizes a QIF (Quicken Interchange Format) export into the
//! total amount of every account/category path, written as a flat CSV.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (AccountPath, Line, QifError, etc.)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Aggregation logic:
//!   - [`core::aggregator`] - Block classification state machine
//!   - [`core::totals`] - Totals per path and maximum path width
//!   - [`core::account_registry`] - Accounts defined in `!Account` blocks
//! - [`io`] - Line reading with pushback and CSV output
//! - [`convert`] - Pipeline from a QIF file to a [`convert::Conversion`]
//!
//! # Recognized Blocks
//!
//! - **`!Account`**: account definitions (`N` name, `T` type, `^` end)
//! - **`!Type:<code>`**: transactions (`L`/`S` category, `T` total,
//!   `$` split amount, `^` end of record)
//! - **`!Type:Cat`, `!Type:Class`**: category and class lists, ignored
//!
//! # Output
//!
//! ```text
//! Envelope,,Amount
//! Food,Groceries,-42.1
//! Salary,,2500
//! ```

// Module declarations
pub mod cli;
pub mod convert;
pub mod core;
pub mod io;
pub mod types;

pub use convert::{aggregate_file, aggregate_reader, Conversion};
pub use self::core::{AccountRegistry, Aggregator, AggregatorConfig, Totals};
pub use io::{write_accounts_csv, write_totals_csv, LineSource};
pub use types::{AccountDefinition, AccountPath, QifError};
