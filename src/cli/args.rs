use crate::core::AggregatorConfig;
use clap::Parser;
use std::path::PathBuf;

/// Summarize a QIF export into per-envelope totals
#[derive(Parser, Debug)]
#[command(name = "qif2csv")]
#[command(about = "Summarize a QIF export into per-envelope totals as CSV", long_about = None)]
pub struct CliArgs {
    /// Input QIF file path
    #[arg(value_name = "INPUT", help = "Path to the input QIF file")]
    pub input_file: PathBuf,

    /// Output CSV file path
    #[arg(value_name = "OUTPUT", help = "Path of the CSV file to create")]
    pub output_file: PathBuf,

    /// Optional account registry export
    #[arg(
        long = "accounts",
        value_name = "PATH",
        help = "Also write the accounts defined in !Account blocks to this CSV file"
    )]
    pub accounts_file: Option<PathBuf>,

    /// Skip blank lines inside blocks instead of failing
    #[arg(
        long = "skip-blank-lines",
        help = "Skip empty lines inside blocks instead of rejecting the file"
    )]
    pub skip_blank_lines: bool,

    /// Keep the amount of a transaction cut short by a new header or end of file
    #[arg(
        long = "commit-interrupted",
        help = "Count the total of a transaction that has no ^ terminator"
    )]
    pub commit_interrupted: bool,

    /// Diagnostic log level
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"],
        help = "Diagnostics written to stderr: error, warn, info, debug or trace"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create an AggregatorConfig from CLI arguments
    pub fn to_aggregator_config(&self) -> AggregatorConfig {
        AggregatorConfig {
            skip_blank_lines: self.skip_blank_lines,
            commit_interrupted: self.commit_interrupted,
        }
    }
}
