// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (missing input or output path, unknown option) or `--help`
/// is given, clap prints the usage text and exits before any file is touched.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber for this crate at the given level
pub fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(format!("qif2csv={level}"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
