//! Sampled workbook data structures

use std::path::PathBuf;

/// Header structure of every sheet in a workbook
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookSample {
    pub path: PathBuf,
    /// Sheets in on-disk order
    pub sheets: Vec<SheetSample>,
}

impl WorkbookSample {
    /// Get all sheet names
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Column labels detected for one worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSample {
    pub name: String,
    /// Header labels, already stringified and disambiguated
    pub columns: Vec<String>,
}

impl SheetSample {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Whether no header was found
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header labels in lower case, for keyword matching
    pub fn lowercase_columns(&self) -> impl Iterator<Item = String> + '_ {
        self.columns.iter().map(|c| c.to_lowercase())
    }
}
