//! Plain-text structure report

use crate::error::{ReportError, ReportResult};
use crate::reader::{SheetSample, WorkbookSample};
use crate::rules::{self, Advisory, SheetRule};
use std::fs;
use std::path::Path;

pub const REPORT_TITLE: &str = "=== INFORME DE ESTRUCTURA DE NEGOCIO (ANONIMIZADO) ===";

/// Ordered report lines, rendered once the whole workbook has been read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
    sheet_count: usize,
}

impl Report {
    /// Start a report listing the workbook's sheet names
    pub fn new(sheet_names: &[&str]) -> Self {
        let mut report = Self::default();
        report.lines.push(format!("{}\n", REPORT_TITLE));
        report
            .lines
            .push(format!("Hojas encontradas: {}\n", sheet_names.join(", ")));
        report
    }

    /// Append one sheet block: delimiter, columns, advisories and separator
    pub fn push_sheet(&mut self, sheet: &SheetSample, advisories: &[Advisory]) {
        self.lines.push(format!("--- Hoja: {} ---", sheet.name));
        self.lines
            .push(format!("Columnas detectadas: {}", sheet.columns.join(", ")));
        for advisory in advisories {
            self.lines.push(advisory.message().to_string());
        }
        self.lines.push("\n".to_string());
        self.sheet_count += 1;
    }

    /// Build the full report for a sampled workbook
    pub fn from_sample(sample: &WorkbookSample, rules: &[Box<dyn SheetRule>]) -> Self {
        let mut report = Self::new(&sample.sheet_names());
        for sheet in &sample.sheets {
            let advisories = rules::classify(rules, sheet);
            report.push_sheet(sheet, &advisories);
        }
        report
    }

    /// Number of sheet blocks
    pub fn sheet_count(&self) -> usize {
        self.sheet_count
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines with newlines
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Write the rendered report, replacing any existing file
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> ReportResult<()> {
        let path = path.as_ref();
        fs::write(path, self.render()).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
