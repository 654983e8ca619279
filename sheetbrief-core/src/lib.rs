//! sheetbrief-core: workbook structure reports for manual redaction
//!
//! Reads the sheet names and column headers of an Excel/ODS workbook, tags
//! sheets that look like financial or inventory data, and writes a plain-text
//! summary that can be cleaned by hand before it is shared.

pub mod config;
pub mod error;
pub mod reader;
pub mod report;
pub mod rules;

use std::path::PathBuf;
use tracing::{debug, info};

pub use config::{KeywordConfig, ReportConfig};
pub use error::{ReportError, ReportResult};
pub use reader::{SheetSample, WorkbookSample};
pub use report::Report;
pub use rules::{Advisory, SheetRule};

/// Result of a complete run
#[derive(Debug)]
pub enum Outcome {
    /// The report was written
    Success { output: PathBuf },
    /// The input workbook does not exist; nothing was written
    MissingInput { path: PathBuf },
    /// The workbook could not be processed; nothing was written
    ProcessingFailure { error: ReportError },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

impl From<ReportError> for Outcome {
    fn from(error: ReportError) -> Self {
        match error {
            ReportError::MissingInput { path } => Outcome::MissingInput { path },
            error => Outcome::ProcessingFailure { error },
        }
    }
}

/// Read the configured workbook and assemble its report in memory
pub fn build_report(config: &ReportConfig) -> ReportResult<Report> {
    if !config.input.is_file() {
        return Err(ReportError::MissingInput {
            path: config.input.clone(),
        });
    }

    let sample = reader::sample_workbook(&config.input, config.sample_rows)?;
    let rules = rules::registry::create_rules(&config.keywords);
    debug!(rules = rules.len(), "classifying sheets");

    Ok(Report::from_sample(&sample, &rules))
}

/// Build the report and write it to the configured output path.
///
/// The output file is only touched once the whole report has been assembled.
pub fn run(config: &ReportConfig) -> Outcome {
    let result = build_report(config).and_then(|report| {
        report.write_to(&config.output)?;
        Ok(report)
    });

    match result {
        Ok(report) => {
            info!(
                output = %config.output.display(),
                sheets = report.sheet_count(),
                "report written"
            );
            Outcome::Success {
                output: config.output.clone(),
            }
        }
        Err(error) => error.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(
            dir.path().join("no-existe.xlsx"),
            dir.path().join("informe.txt"),
        );

        match run(&config) {
            Outcome::MissingInput { path } => assert_eq!(path, config.input),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!config.output.exists());
    }

    #[test]
    fn test_directory_input_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path(), dir.path().join("informe.txt"));
        assert!(build_report(&config).unwrap_err().is_missing_input());
    }

    #[test]
    fn test_outcome_from_error() {
        let outcome: Outcome = ReportError::MissingInput {
            path: PathBuf::from("x.xlsx"),
        }
        .into();
        assert!(matches!(outcome, Outcome::MissingInput { .. }));
        assert!(!outcome.is_success());
    }
}
