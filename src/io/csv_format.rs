//! CSV output for totals and account definitions
//!
//! This module centralizes all CSV format concerns, providing:
//! - The flattened envelope/amount summary
//! - The optional account registry export
//!
//! All functions write to any `Write` implementation for easy testing.
//!
//! # Summary layout
//!
//! Each path occupies as many name columns as the widest path in the file,
//! one segment per column, followed by the total:
//!
//! ```text
//! Envelope,,Amount
//! Food,Groceries,12.5
//! Travel,,7.25
//! ```

use crate::core::{AccountRegistry, Totals};
use crate::types::account_path::SEGMENT_SEPARATOR;
use crate::types::QifError;
use csv::Writer;
use std::io::Write;

/// First header cell, above the first name column
pub const ENVELOPE_HEADER: &str = "Envelope";
/// Last header cell, above the totals
pub const AMOUNT_HEADER: &str = "Amount";

/// Write the totals summary
///
/// Rows are sorted by canonical path for deterministic output. At least one
/// name column is always reserved, so a file with no paths still yields a
/// two-column header.
///
/// # Errors
///
/// Returns `QifError::Csv` if a row cannot be written, or `QifError::Io` if
/// the output cannot be flushed.
pub fn write_totals_csv(totals: &Totals, output: &mut dyn Write) -> Result<(), QifError> {
    let name_columns = totals.max_width().max(1);
    let mut writer = Writer::from_writer(output);

    let mut header = vec![String::new(); name_columns + 1];
    header[0] = ENVELOPE_HEADER.to_string();
    header[name_columns] = AMOUNT_HEADER.to_string();
    writer.write_record(&header)?;

    for (key, amount) in totals.sorted() {
        let mut row: Vec<String> = key.split(SEGMENT_SEPARATOR).map(str::to_string).collect();
        if row.len() < name_columns {
            row.resize(name_columns, String::new());
        }
        row.push(amount.to_string());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the account registry as `name,type` rows sorted by name
///
/// # Errors
///
/// Returns `QifError::Csv` if a row cannot be serialized, or `QifError::Io`
/// if the output cannot be flushed.
pub fn write_accounts_csv(
    accounts: &AccountRegistry,
    output: &mut dyn Write,
) -> Result<(), QifError> {
    let mut writer = Writer::from_writer(output);

    if accounts.is_empty() {
        writer.write_record(["name", "type"])?;
    }
    for definition in accounts.definitions() {
        writer.serialize(definition)?;
    }

    writer.flush()?;
    Ok(())
}
