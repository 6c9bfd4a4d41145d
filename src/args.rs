use clap::Parser;
use std::path::PathBuf;

use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "domaincount",
    about = "Count customer email addresses per domain in a CSV file",
    version,
    long_about = None
)]
pub struct Args {
    /// CSV file with a header row
    pub input: PathBuf,

    /// File in which the result should be saved (defaults to stdout)
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Name of the column holding email addresses
    #[arg(short, long, default_value = "email")]
    pub column: String,

    /// Output format: yaml or json
    #[arg(short, long, default_value = "yaml")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
