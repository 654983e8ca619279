//! Error types for report generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or writing a structure report
#[derive(Debug, Error)]
pub enum ReportError {
    /// The configured workbook does not exist
    #[error("No se encuentra el archivo {}", .path.display())]
    MissingInput { path: PathBuf },

    /// The workbook could not be opened or its format is not supported
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// A worksheet could not be read
    #[error("hoja '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// The report file could not be written
    #[error("{}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Whether this error means the input file was absent
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ReportError::MissingInput { .. })
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
