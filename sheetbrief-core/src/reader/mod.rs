//! Excel/ODS header sampling using calamine

use crate::error::{ReportError, ReportResult};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

pub mod sample;

pub use sample::{SheetSample, WorkbookSample};

/// Read the header structure of every sheet of a workbook.
///
/// Only the header row and the next `sample_rows` rows of each sheet take part
/// in column detection.
pub fn sample_workbook<P: AsRef<Path>>(path: P, sample_rows: usize) -> ReportResult<WorkbookSample> {
    let path = path.as_ref();
    let mut excel: Sheets<_> = open_workbook_auto(path).map_err(|source| ReportError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = excel.sheet_names();
    debug!(path = %path.display(), sheets = sheet_names.len(), "opened workbook");

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in sheet_names {
        let range = excel
            .worksheet_range(&sheet_name)
            .map_err(|source| ReportError::Sheet {
                sheet: sheet_name.clone(),
                source,
            })?;

        let sheet = SheetSample::new(sheet_name, extract_columns(&range, sample_rows));
        if sheet.is_empty() {
            debug!(sheet = %sheet.name, "no header found, sheet is empty");
        } else {
            debug!(sheet = %sheet.name, columns = sheet.columns.len(), "sampled sheet header");
        }
        sheets.push(sheet);
    }

    Ok(WorkbookSample {
        path: path.to_path_buf(),
        sheets,
    })
}

/// Extract column labels from the first non-blank row of a range.
///
/// The column window spans the non-empty cells of the header row and the
/// `sample_rows` rows below it. Rows further down are never inspected.
pub fn extract_columns(range: &Range<Data>, sample_rows: usize) -> Vec<String> {
    let mut rows = range.rows().skip_while(|row| is_blank_row(row));
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    let sampled: Vec<&[Data]> = std::iter::once(header)
        .chain(rows.take(sample_rows))
        .collect();
    let Some((first, last)) = column_window(&sampled) else {
        return Vec::new();
    };

    let labels = (first..=last)
        .enumerate()
        .map(|(position, col)| match header.get(col) {
            Some(cell) if !is_empty_cell(cell) => header_label(cell),
            _ => format!("Unnamed: {}", position),
        })
        .collect();

    dedupe_labels(labels)
}

/// Textual representation of a header cell
pub fn header_label(cell: &Data) -> String {
    match cell {
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::String(s) => s.clone(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}

fn is_empty_cell(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(is_empty_cell)
}

/// First and last column index holding data in any of the rows
fn column_window(rows: &[&[Data]]) -> Option<(usize, usize)> {
    let mut window: Option<(usize, usize)> = None;
    for row in rows {
        let first = row.iter().position(|c| !is_empty_cell(c));
        let last = row.iter().rposition(|c| !is_empty_cell(c));
        if let (Some(first), Some(last)) = (first, last) {
            window = Some(match window {
                Some((lo, hi)) => (lo.min(first), hi.max(last)),
                None => (first, last),
            });
        }
    }
    window
}

/// Make repeated labels unique: `Precio`, `Precio.1`, `Precio.2`
fn dedupe_labels(labels: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut unique_labels = Vec::with_capacity(labels.len());

    for label in labels {
        let mut unique = label.clone();
        let count = counts.entry(label.clone()).or_insert(0);
        while seen.contains(&unique) {
            *count += 1;
            unique = format!("{}.{}", label, count);
        }
        seen.insert(unique.clone());
        unique_labels.push(unique);
    }

    unique_labels
}
