//! Conversion pipeline
//!
//! This module orchestrates a conversion by coordinating between the
//! [`LineSource`] (for QIF input) and the [`Aggregator`] (for block
//! classification and totals).
//!
//! # Design
//!
//! The pipeline only reads. Writing is left to the caller so that an output
//! file is created only once the whole input has been aggregated; a malformed
//! input therefore never leaves a partial CSV behind.
//!
//! ```no_run
//! use qif2csv::convert::aggregate_file;
//! use qif2csv::core::AggregatorConfig;
//! use qif2csv::io::write_totals_csv;
//! use std::path::Path;
//!
//! let conversion = aggregate_file(Path::new("export.qif"), AggregatorConfig::default())
//!     .expect("conversion failed");
//! write_totals_csv(&conversion.totals, &mut std::io::stdout()).expect("write failed");
//! println!("Processed {} lines.", conversion.lines_read);
//! ```

use crate::core::{AccountRegistry, Aggregator, AggregatorConfig, Totals};
use crate::io::LineSource;
use crate::types::QifError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Result of aggregating one QIF stream
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Totals per path and the maximum path width
    pub totals: Totals,
    /// Accounts defined in `!Account` blocks
    pub accounts: AccountRegistry,
    /// Number of physical lines read
    pub lines_read: u64,
}

/// Aggregate a QIF stream from any buffered reader
///
/// # Errors
///
/// Returns an error if reading fails or a block contains a blank line that the
/// configuration does not allow.
pub fn aggregate_reader<R: BufRead>(
    reader: R,
    config: AggregatorConfig,
) -> Result<Conversion, QifError> {
    let mut source = LineSource::new(reader);
    let mut aggregator = Aggregator::with_config(config);

    aggregator.consume(&mut source)?;

    let (totals, accounts) = aggregator.into_parts();
    tracing::debug!(
        lines = source.lines_read(),
        envelopes = totals.len(),
        width = totals.max_width(),
        "aggregation finished"
    );

    Ok(Conversion {
        totals,
        accounts,
        lines_read: source.lines_read(),
    })
}

/// Aggregate a QIF file
///
/// # Errors
///
/// Returns `QifError::InputOpen` if the file cannot be opened, otherwise the
/// errors of [`aggregate_reader`].
pub fn aggregate_file(path: &Path, config: AggregatorConfig) -> Result<Conversion, QifError> {
    let file = File::open(path)
        .map_err(|e| QifError::input_open(&path.display().to_string(), &e))?;

    aggregate_reader(BufReader::with_capacity(8 * 1024, file), config)
}
