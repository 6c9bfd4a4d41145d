use std::time::Instant;
use tracing::{info, warn};

use crate::domain::{extract_domain, is_valid_email};
use crate::error::Result;
use crate::source::EmailSource;
use crate::stats::{DomainReport, DomainTally};

// Line 1 of the input is the header.
const FIRST_DATA_LINE: u64 = 2;

/// Drains `source` and counts valid addresses per domain.
///
/// Invalid addresses are logged and skipped. Any source error aborts the whole
/// count; no partial report is returned.
pub fn count_domains<S: EmailSource + ?Sized>(source: &mut S) -> Result<DomainReport> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "domain_counter",
        "Starting email domain count"
    );

    let mut tally = DomainTally::new();

    for line in FIRST_DATA_LINE.. {
        let Some(email) = source.read_email()? else {
            break;
        };

        if !is_valid_email(&email) {
            warn!(
                action = "validate",
                component = "email_validator",
                line,
                email = %email,
                "Skipping invalid email address"
            );
            tally.record_invalid();
            continue;
        }

        match extract_domain(&email) {
            Some(domain) => tally.record_valid(domain),
            None => tally.record_invalid(),
        }
    }

    let report = tally.into_report();
    info!(
        action = "complete",
        component = "domain_counter",
        rows_read = report.rows_read,
        rows_invalid = report.rows_invalid,
        unique_domains = report.domains.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Email domain count completed"
    );

    Ok(report)
}
