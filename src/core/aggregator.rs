//! QIF aggregation state machine
//!
//! This module provides the Aggregator that pulls lines from a [`LineSource`],
//! classifies record blocks and accumulates amounts per hierarchical path.
//!
//! # States
//!
//! ```text
//!            !Account                       ^
//!   Idle ─────────────────► InAccountBlock ───► Idle
//!    │
//!    │ !Type:<code>  (code not Cat/Class)
//!    ▼
//!   InTransactionBlock ──^──► InTransactionBlock   (next record, same section)
//!    │
//!    └──── !<anything> ────► Idle   (line pushed back and re-read)
//! ```
//!
//! `!Type:Cat` and `!Type:Class` never leave `Idle`: their lines match no
//! header and are discarded one by one.
//!
//! # Transaction records
//!
//! - `L`/`S` set the current path and widen the totals if needed
//! - `T` stores a pending amount, committed only at `^`
//! - `$` commits immediately to the current path and clears the pending amount
//! - `^` commits the pending amount and starts a fresh record

use crate::core::account_registry::AccountRegistry;
use crate::core::amount::parse_amount;
use crate::core::totals::Totals;
use crate::io::LineSource;
use crate::types::line::{
    TAG_CATEGORY, TAG_END, TAG_HEADER, TAG_NAME, TAG_SPLIT_AMOUNT, TAG_SPLIT_CATEGORY, TAG_TOTAL,
};
use crate::types::{AccountPath, BlockHeader, Line, QifError};
use std::io::BufRead;

/// Behavior switches for input the reference tool handled badly
///
/// The default reproduces the reference behavior: blank lines inside a block
/// are fatal and a pending `T` amount is dropped when its record is cut short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Skip empty lines inside blocks instead of failing with `MalformedLine`
    pub skip_blank_lines: bool,
    /// Commit the pending `T` amount of a record interrupted by `!` or end of input
    pub commit_interrupted: bool,
}

/// Per-record state of a transaction block
#[derive(Debug, Default)]
struct TransactionRecord {
    path: Option<AccountPath>,
    pending: f64,
}

impl TransactionRecord {
    /// The current path, or the uncategorized path if none was declared
    fn target(&self) -> AccountPath {
        self.path.clone().unwrap_or_else(AccountPath::uncategorized)
    }
}

#[derive(Debug, Default)]
enum BlockState {
    #[default]
    Idle,
    InAccountBlock {
        name: String,
        account_type: String,
    },
    InTransactionBlock(TransactionRecord),
}

/// Outcome of feeding one line to the state machine
#[derive(Debug, PartialEq, Eq)]
enum LineOutcome {
    Consumed,
    /// The line belongs to the next block and must be read again
    Unread,
}

/// QIF aggregator
///
/// Owns the totals, the account registry and the block state for one input
/// stream. Construct a fresh one per stream.
#[derive(Debug, Default)]
pub struct Aggregator {
    config: AggregatorConfig,
    state: BlockState,
    totals: Totals,
    accounts: AccountRegistry,
}

impl Aggregator {
    /// Create an aggregator with the reference behavior
    pub fn new() -> Self {
        Self::with_config(AggregatorConfig::default())
    }

    pub fn with_config(config: AggregatorConfig) -> Self {
        Aggregator {
            config,
            state: BlockState::Idle,
            totals: Totals::new(),
            accounts: AccountRegistry::new(),
        }
    }

    /// Drive the state machine until the source is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source fails to read a line
    /// - An empty line appears inside a block and blank lines are not skipped
    pub fn consume<R: BufRead>(&mut self, source: &mut LineSource<R>) -> Result<(), QifError> {
        while let Some(line) = source.next_line()? {
            if self.process_line(&line, source.lines_read())? == LineOutcome::Unread {
                source.push_back(line)?;
            }
        }
        self.finish();
        Ok(())
    }

    /// Accumulated totals
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Accounts registered from `!Account` blocks
    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    /// Consume the aggregator, returning totals and registry
    pub fn into_parts(self) -> (Totals, AccountRegistry) {
        (self.totals, self.accounts)
    }

    /// Route a line to the handler for the current state
    fn process_line(&mut self, text: &str, line_number: u64) -> Result<LineOutcome, QifError> {
        if matches!(self.state, BlockState::Idle) {
            self.process_idle_line(text);
            return Ok(LineOutcome::Consumed);
        }

        let Some(line) = Line::parse(text) else {
            if self.config.skip_blank_lines {
                tracing::warn!(line_number, "skipping blank line inside block");
                return Ok(LineOutcome::Consumed);
            }
            return Err(QifError::malformed_line(line_number));
        };

        match self.state {
            BlockState::InAccountBlock { .. } => {
                self.process_account_line(line);
                Ok(LineOutcome::Consumed)
            }
            BlockState::InTransactionBlock(_) => Ok(self.process_transaction_line(line)),
            BlockState::Idle => Ok(LineOutcome::Consumed),
        }
    }

    /// Look for the start of the next block
    fn process_idle_line(&mut self, text: &str) {
        match BlockHeader::parse(text) {
            Some(BlockHeader::Account) => {
                tracing::debug!("entering account block");
                self.state = BlockState::InAccountBlock {
                    name: String::new(),
                    account_type: String::new(),
                };
            }
            Some(BlockHeader::Transactions(code)) => {
                tracing::debug!(code, "entering transaction block");
                self.state = BlockState::InTransactionBlock(TransactionRecord::default());
            }
            Some(BlockHeader::NonMonetary(code)) => {
                tracing::debug!(code, "ignoring non-monetary block");
            }
            None => {}
        }
    }

    fn process_account_line(&mut self, line: Line<'_>) {
        let BlockState::InAccountBlock { name, account_type } = &mut self.state else {
            return;
        };
        match line.tag {
            TAG_NAME => *name = line.payload.to_string(),
            TAG_TOTAL => *account_type = line.payload.to_string(),
            TAG_END => {
                let name = std::mem::take(name);
                let account_type = std::mem::take(account_type);
                tracing::debug!(%name, %account_type, "registered account");
                self.accounts.register(name, account_type);
                self.state = BlockState::Idle;
            }
            _ => {}
        }
    }

    fn process_transaction_line(&mut self, line: Line<'_>) -> LineOutcome {
        let BlockState::InTransactionBlock(record) = &mut self.state else {
            return LineOutcome::Consumed;
        };
        match line.tag {
            TAG_HEADER => {
                self.abandon_record();
                self.state = BlockState::Idle;
                return LineOutcome::Unread;
            }
            TAG_CATEGORY | TAG_SPLIT_CATEGORY => {
                let path = AccountPath::parse(line.payload);
                self.totals.declare(&path);
                record.path = Some(path);
            }
            TAG_TOTAL => record.pending = parse_amount(line.payload),
            TAG_SPLIT_AMOUNT => {
                let amount = parse_amount(line.payload);
                self.totals.add(&record.target(), amount);
                record.pending = 0.0;
            }
            TAG_END => {
                let record = std::mem::take(record);
                if record.path.is_some() || record.pending != 0.0 {
                    self.totals.add(&record.target(), record.pending);
                }
            }
            _ => {}
        }
        LineOutcome::Consumed
    }

    /// Handle a transaction record that ends without its `^`
    fn abandon_record(&mut self) {
        let BlockState::InTransactionBlock(record) = &mut self.state else {
            return;
        };
        let record = std::mem::take(record);
        if record.pending == 0.0 {
            return;
        }
        if self.config.commit_interrupted {
            self.totals.add(&record.target(), record.pending);
        } else {
            tracing::warn!(
                path = %record.target(),
                amount = record.pending,
                "discarding amount of unterminated transaction"
            );
        }
    }

    /// End of input
    fn finish(&mut self) {
        self.abandon_record();
        self.state = BlockState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn aggregate_with(input: &str, config: AggregatorConfig) -> Aggregator {
        let mut aggregator = Aggregator::with_config(config);
        let mut source = LineSource::new(input.as_bytes());
        aggregator.consume(&mut source).unwrap();
        aggregator
    }

    fn aggregate(input: &str) -> Aggregator {
        aggregate_with(input, AggregatorConfig::default())
    }

    #[test]
    fn test_whole_transaction() {
        let aggregator = aggregate("!Type:Bank\nLFood:Groceries\nT12.50\n^\n");
        let totals = aggregator.totals();

        assert_eq!(totals.get("Food:Groceries"), Some(12.5));
        assert_eq!(totals.max_width(), 2);
        assert_eq!(totals.len(), 1);
    }

    #[test]
    fn test_split_amounts_are_independent() {
        let aggregator = aggregate("!Type:Bank\nLFood\n$5.00\nLTravel\n$7.25\n^\n");
        let totals = aggregator.totals();

        assert_eq!(totals.get("Food"), Some(5.0));
        assert_eq!(totals.get("Travel"), Some(7.25));
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_split_lines_sum_per_path() {
        let input = "!Type:Bank\nT-30\nSFood\n$-10\nSRent\n$-15\nSFood\n$-5\n^\n";
        let totals = aggregate(input).into_parts().0;

        assert_eq!(totals.get("Food"), Some(-15.0));
        assert_eq!(totals.get("Rent"), Some(-15.0));
    }

    #[test]
    fn test_pending_total_and_splits_accumulate_on_same_key() {
        // T after the last split is still pending at ^
        let totals = aggregate("!Type:Bank\nLFood\n$5\nT3\n^\n").into_parts().0;
        assert_eq!(totals.get("Food"), Some(8.0));
    }

    #[test]
    fn test_last_total_wins_within_record() {
        let totals = aggregate("!Type:Bank\nT1\nT2\nLFood\n^\n").into_parts().0;
        assert_eq!(totals.get("Food"), Some(2.0));
    }

    #[test]
    fn test_total_goes_to_path_current_at_terminator() {
        let totals = aggregate("!Type:Bank\nLFood\nT9\nLRent\n^\n").into_parts().0;
        assert_eq!(totals.get("Rent"), Some(9.0));
        assert_eq!(totals.get("Food"), None);
    }

    #[rstest]
    #[case::cat("!Type:Cat\nNFood:Groceries:Organic\nDgroceries\nE\n^\n")]
    #[case::class("!Type:Class\nNBusiness\nLX:Y:Z\nT100\n^\n")]
    fn test_non_monetary_blocks_are_ignored(#[case] block: &str) {
        let input = format!("{block}!Type:Bank\nLFood\nT4\n^\n");
        let totals = aggregate(&input).into_parts().0;

        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("Food"), Some(4.0));
        assert_eq!(totals.max_width(), 1);
    }

    #[rstest]
    #[case::plain("LSavings")]
    #[case::transfer("L[Savings]")]
    #[case::split_transfer("S[Savings]")]
    fn test_bracketed_paths(#[case] category: &str) {
        let input = format!("!Type:Bank\n{category}\nT20\n^\n");
        let totals = aggregate(&input).into_parts().0;

        assert_eq!(totals.get("Savings"), Some(20.0));
        assert_eq!(totals.max_width(), 1);
    }

    #[test]
    fn test_width_tracks_deepest_declared_path() {
        let input = "!Type:Bank\nLA\nT1\n^\nLA:B:C:D\nT1\n^\nLA:B\nT1\n^\n";
        assert_eq!(aggregate(input).totals().max_width(), 4);
    }

    #[test]
    fn test_width_raised_by_path_without_amount() {
        let input = "!Type:Bank\nLA\nT1\nLX:Y:Z\nLA\n^\n";
        let totals = aggregate(input).into_parts().0;

        assert_eq!(totals.max_width(), 3);
        assert_eq!(totals.get("X:Y:Z"), None);
    }

    #[test]
    fn test_multiple_records_in_one_section() {
        let input = "!Type:Bank\nD01/01/2024\nT-10\nLFood\n^\nD01/02/2024\nT-20\nLFood\n^\nT100\nLSalary\n^\n";
        let totals = aggregate(input).into_parts().0;

        assert_eq!(totals.get("Food"), Some(-30.0));
        assert_eq!(totals.get("Salary"), Some(100.0));
    }

    #[test]
    fn test_path_does_not_leak_into_next_record() {
        let totals = aggregate("!Type:Bank\nLFood\nT1\n^\nT5\n^\n").into_parts().0;
        assert_eq!(totals.get("Food"), Some(1.0));
        assert_eq!(totals.get(""), Some(5.0));
    }

    #[test]
    fn test_empty_record_records_nothing() {
        let totals = aggregate("!Type:Bank\nD01/01/2024\nPNobody\n^\n").into_parts().0;
        assert!(totals.is_empty());
        assert_eq!(totals.max_width(), 0);
    }

    #[test]
    fn test_uncategorized_amount_widens_to_one() {
        let totals = aggregate("!Type:Bank\nT7\n^\n").into_parts().0;
        assert_eq!(totals.get(""), Some(7.0));
        assert_eq!(totals.max_width(), 1);
    }

    #[test]
    fn test_unparseable_amount_counts_as_zero() {
        let totals = aggregate("!Type:Bank\nLFood\nTabc\n^\nLFood\n$x\n^\n")
            .into_parts()
            .0;
        assert_eq!(totals.get("Food"), Some(0.0));
    }

    #[test]
    fn test_account_block_registers_last_name_and_type() {
        let input = "!Account\nNOld\nTCash\nNChecking\nTBank\nDdescription\n^\n";
        let aggregator = aggregate(input);

        assert_eq!(aggregator.accounts().account_type("Checking"), Some("Bank"));
        assert_eq!(aggregator.accounts().len(), 1);
        assert!(aggregator.totals().is_empty());
    }

    #[test]
    fn test_account_block_followed_by_transactions() {
        let input = "!Account\nNChecking\nTBank\n^\n!Type:Bank\nLFood\nT-3.5\n^\n";
        let aggregator = aggregate(input);

        assert_eq!(aggregator.accounts().account_type("Checking"), Some("Bank"));
        assert_eq!(aggregator.totals().get("Food"), Some(-3.5));
    }

    #[test]
    fn test_header_line_ends_transaction_block_and_is_reread() {
        let input = "!Type:Bank\nLFood\nT1\n^\n!Account\nNChecking\nTBank\n^\n";
        let aggregator = aggregate(input);

        assert_eq!(aggregator.totals().get("Food"), Some(1.0));
        assert_eq!(aggregator.accounts().account_type("Checking"), Some("Bank"));
    }

    #[test]
    fn test_interrupted_record_drops_pending_total() {
        let input = "!Type:Bank\nLFood\n$2\nLRent\nT9\n!Type:Bank\nLTravel\nT1\n^\n";
        let totals = aggregate(input).into_parts().0;

        assert_eq!(totals.get("Food"), Some(2.0));
        assert_eq!(totals.get("Rent"), None);
        assert_eq!(totals.get("Travel"), Some(1.0));
        assert_eq!(totals.max_width(), 1);
    }

    #[test]
    fn test_interrupted_record_committed_when_configured() {
        let config = AggregatorConfig {
            commit_interrupted: true,
            ..AggregatorConfig::default()
        };
        let input = "!Type:Bank\nLRent\nT9\n!Type:Bank\nLTravel\nT1\n^\n";
        let totals = aggregate_with(input, config).into_parts().0;

        assert_eq!(totals.get("Rent"), Some(9.0));
        assert_eq!(totals.get("Travel"), Some(1.0));
    }

    #[rstest]
    #[case::reference(false, None)]
    #[case::committed(true, Some(9.0))]
    fn test_record_open_at_end_of_input(
        #[case] commit_interrupted: bool,
        #[case] expected: Option<f64>,
    ) {
        let config = AggregatorConfig {
            commit_interrupted,
            ..AggregatorConfig::default()
        };
        let totals = aggregate_with("!Type:Bank\nLRent\nT9\n", config)
            .into_parts()
            .0;
        assert_eq!(totals.get("Rent"), expected);
    }

    #[rstest]
    #[case::transaction_block("!Type:Bank\nLFood\n\nT1\n^\n", 3)]
    #[case::account_block("!Account\nNChecking\n\n^\n", 3)]
    #[case::after_record("!Type:Bank\nLFood\nT1\n^\n\n", 5)]
    fn test_blank_line_inside_block_is_malformed(#[case] input: &str, #[case] line: u64) {
        let mut aggregator = Aggregator::new();
        let mut source = LineSource::new(input.as_bytes());

        let result = aggregator.consume(&mut source);
        assert_eq!(result, Err(QifError::MalformedLine { line }));
    }

    #[test]
    fn test_blank_lines_skipped_when_configured() {
        let config = AggregatorConfig {
            skip_blank_lines: true,
            ..AggregatorConfig::default()
        };
        let totals = aggregate_with("!Type:Bank\nLFood\n\nT1\n^\n\n", config)
            .into_parts()
            .0;
        assert_eq!(totals.get("Food"), Some(1.0));
    }

    #[test]
    fn test_blank_and_unknown_lines_ignored_when_idle() {
        let input = "\n!Option:AutoSwitch\nNStray\nT99\n^\n\n!Type:Bank\nLFood\nT1\n^\n";
        let totals = aggregate(input).into_parts().0;

        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("Food"), Some(1.0));
    }

    #[test]
    fn test_rerun_is_identical() {
        let input = "!Account\nNChecking\nTBank\n^\n!Type:Bank\nLA:B\nT1.1\n^\nSC\n$2.2\nSA:B\n$3.3\n^\n";
        let first = aggregate(input);
        let second = aggregate(input);

        assert_eq!(first.totals(), second.totals());
        assert_eq!(first.totals().max_width(), second.totals().max_width());
    }

    #[test]
    fn test_every_key_fits_width() {
        let input = "!Type:Bank\nT1\n^\nLA:B:C\n$1\n^\nL[X:Y]\nT2\n^\n";
        let totals = aggregate(input).into_parts().0;
        assert!(totals.widest_key() <= totals.max_width());
        assert_eq!(totals.max_width(), 3);
    }
}
