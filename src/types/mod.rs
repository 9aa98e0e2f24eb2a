//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account definitions from `!Account` blocks
//! - `account_path`: Hierarchical account/category paths
//! - `line`: Tagged QIF lines and block headers
//! - `error`: Error types for the converter

pub mod account;
pub mod account_path;
pub mod error;
pub mod line;

pub use account::AccountDefinition;
pub use account_path::AccountPath;
pub use error::QifError;
pub use line::{BlockHeader, Line};
