use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;
use tracing::info;

use crate::{counter, source::CsvEmailSource, stats::DomainReport, utils, Args};

/// Counts email domains in `args.input`.
pub fn import_customers(args: &Args) -> Result<DomainReport> {
    let start_time = Instant::now();
    info!(action = "start", component = "importer", input = ?args.input, column = %args.column, "Reading customer file");

    let file = File::open(&args.input)
        .with_context(|| format!("Error opening file: {}", args.input.display()))?;

    let mut source = CsvEmailSource::new(BufReader::new(file), &args.column)
        .context("Error creating CSV email reader")?;
    info!(action = "resolve", component = "importer", column_index = source.email_column(), "Email column located");

    let report = counter::count_domains(&mut source).context("Error counting email domains")?;

    info!(
        action = "complete",
        component = "importer",
        unique_domains = report.domains.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Customer file processed"
    );
    Ok(report)
}

/// Writes the report to `args.output_file`, or stdout when none is given.
pub fn write_report(report: &DomainReport, args: &Args) -> Result<()> {
    let mut sink = utils::open_output(args.output_file.as_deref())?;
    report
        .write_as(&mut *sink, args.format)
        .context("Error writing results")?;

    info!(action = "write", component = "report", format = %args.format, output = ?args.output_file, "Report written");
    Ok(())
}

pub fn run(args: &Args) -> Result<DomainReport> {
    let report = import_customers(args)?;
    write_report(&report, args)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use std::fs;
    use std::path::PathBuf;

    fn args_for(input: PathBuf, output: Option<PathBuf>, format: OutputFormat) -> Args {
        Args {
            input,
            output_file: output,
            column: "email".to_string(),
            format,
            verbose: false,
        }
    }

    #[test]
    fn runs_whole_pipeline_into_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("customers.csv");
        let output = dir.path().join("out.json");
        fs::write(
            &input,
            "first_name,email\nAnn,ann@mail.com\nBob,bob@gmail.com\nCid,cid@mail.com\nDee,not-an-email\n",
        )
        .unwrap();

        let report = run(&args_for(input, Some(output.clone()), OutputFormat::Json)).unwrap();
        assert_eq!(report.rows_invalid, 1);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "[{\"Name\":\"mail.com\",\"Occurences\":2},{\"Name\":\"gmail.com\",\"Occurences\":1}]\n"
        );
    }

    #[test]
    fn missing_input_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.csv");
        let err = import_customers(&args_for(input, None, OutputFormat::Yaml)).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.csv"));
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("customers.csv");
        fs::write(&input, "name,mail\nJohn,john.doe@mail.com\n").unwrap();

        let err = import_customers(&args_for(input, None, OutputFormat::Yaml)).unwrap_err();
        assert!(format!("{:#}", err).contains("There is no column named email"));
    }
}
