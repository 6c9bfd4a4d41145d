use clap::Parser;
use tracing::info;

use domaincount::{utils, Args};

fn main() {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    match domaincount::run(&args) {
        Ok(report) => {
            info!(
                action = "complete",
                component = "main",
                rows_read = report.rows_read,
                rows_invalid = report.rows_invalid,
                unique_domains = report.domains.len(),
                "Done"
            );
        }
        Err(e) => {
            // Shown whatever RUST_LOG says.
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
