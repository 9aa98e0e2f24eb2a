//! Core aggregation module
//!
//! This module contains the QIF aggregation components:
//! - `aggregator` - Block classification state machine
//! - `totals` - Totals per hierarchical path and width tracking
//! - `account_registry` - Accounts defined in `!Account` blocks
//! - `amount` - Lenient amount parsing

pub mod account_registry;
pub mod aggregator;
pub mod amount;
pub mod totals;

pub use account_registry::AccountRegistry;
pub use aggregator::{Aggregator, AggregatorConfig};
pub use amount::{parse_amount, AMOUNT_FALLBACK};
pub use totals::Totals;
