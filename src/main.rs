//! qif2csv command-line tool
//!
//! Reads a QIF export and writes the total amount of every account/category
//! path to a CSV file, one name segment per column.
//!
//! # Usage
//!
//! ```bash
//! qif2csv export.qif totals.csv
//! qif2csv --accounts accounts.csv export.qif totals.csv
//! qif2csv --skip-blank-lines --commit-interrupted export.qif totals.csv
//! qif2csv --log-level debug export.qif totals.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input not readable, malformed block, output not writable)
//! - 2: Invalid or missing arguments (usage printed by clap)

use qif2csv::cli::{self, CliArgs};
use qif2csv::convert::aggregate_file;
use qif2csv::io::{write_accounts_csv, write_totals_csv};
use qif2csv::QifError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), QifError> {
    println!("Reading from {}", args.input_file.display());
    let conversion = aggregate_file(&args.input_file, args.to_aggregator_config())?;

    println!("Saving to {}", args.output_file.display());
    let mut output = create_output(&args.output_file)?;
    write_totals_csv(&conversion.totals, &mut output)?;
    output.flush()?;

    if let Some(accounts_file) = &args.accounts_file {
        println!("Saving accounts to {}", accounts_file.display());
        let mut output = create_output(accounts_file)?;
        write_accounts_csv(&conversion.accounts, &mut output)?;
        output.flush()?;
    }

    println!("Processed {} lines.", conversion.lines_read);
    Ok(())
}

fn create_output(path: &Path) -> Result<BufWriter<File>, QifError> {
    let file =
        File::create(path).map_err(|e| QifError::output_create(&path.display().to_string(), &e))?;
    Ok(BufWriter::new(file))
}
