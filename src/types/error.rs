//! Error types for qif2csv
//!
//! This module defines all error types that can occur while converting a QIF
//! export. Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File Errors**: input cannot be opened, output cannot be created
//! - **I/O and CSV Errors**: failures while reading lines or writing rows
//! - **Format Errors**: a line inside a block that carries no tag character
//!
//! Amount parse failures are deliberately absent: a malformed amount falls back
//! to zero (see [`crate::core::amount`]) and never surfaces as an error.

use thiserror::Error;

/// Main error type for the converter
///
/// Every variant is fatal for the current run: nothing is written to the
/// output when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QifError {
    /// The input QIF file could not be opened
    #[error("Cannot open input file {path}: {message}")]
    InputOpen {
        /// The path that could not be opened
        path: String,
        /// Description of the underlying I/O failure
        message: String,
    },

    /// The output CSV file could not be created
    #[error("Cannot create output file {path}: {message}")]
    OutputCreate {
        /// The path that could not be created
        path: String,
        /// Description of the underlying I/O failure
        message: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV serialization error
    #[error("CSV write error: {message}")]
    Csv {
        /// Description of the CSV error
        message: String,
    },

    /// An empty line was found where a tagged line was expected
    ///
    /// Only raised inside account and transaction blocks, and only when blank
    /// lines are not configured to be skipped.
    #[error("Malformed line {line}: expected a tagged line inside a block")]
    MalformedLine {
        /// 1-based physical line number
        line: u64,
    },

    /// A second line was pushed back before the first one was replayed
    #[error("Line source already holds a pushed-back line")]
    PushbackOccupied,
}

impl From<std::io::Error> for QifError {
    fn from(error: std::io::Error) -> Self {
        QifError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for QifError {
    fn from(error: csv::Error) -> Self {
        QifError::Csv {
            message: error.to_string(),
        }
    }
}

impl QifError {
    /// Create an InputOpen error
    pub fn input_open(path: &str, error: &std::io::Error) -> Self {
        QifError::InputOpen {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create an OutputCreate error
    pub fn output_create(path: &str, error: &std::io::Error) -> Self {
        QifError::OutputCreate {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create a MalformedLine error
    pub fn malformed_line(line: u64) -> Self {
        QifError::MalformedLine { line }
    }
}
