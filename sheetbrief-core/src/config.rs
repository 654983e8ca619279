//! Configuration for a report run

use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Workbook analysed when no path is given
pub const DEFAULT_INPUT: &str = "Venstas Pagos.xlsm";

/// Report written when no path is given
pub const DEFAULT_OUTPUT: &str = "INFORME_ESTRUCTURA_POS.txt";

/// Data rows read below the header of each sheet
pub const DEFAULT_SAMPLE_ROWS: usize = 5;

pub const DEFAULT_FINANCIAL_KEYWORDS: &[&str] = &["precio", "price", "monto", "total", "costo"];
pub const DEFAULT_INVENTORY_KEYWORDS: &[&str] = &["stock", "cantidad", "inventario", "unidades"];

/// Main report configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Workbook to inspect
    pub input: PathBuf,
    /// Text report destination, overwritten on every successful run
    pub output: PathBuf,
    /// Number of data rows sampled per sheet
    pub sample_rows: usize,
    pub keywords: KeywordConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sample_rows: DEFAULT_SAMPLE_ROWS,
            keywords: KeywordConfig::default(),
        }
    }
}

/// Keyword lists driving the advisory tags
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub financial: Vec<String>,
    pub inventory: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            financial: to_owned_list(DEFAULT_FINANCIAL_KEYWORDS),
            inventory: to_owned_list(DEFAULT_INVENTORY_KEYWORDS),
        }
    }
}

impl KeywordConfig {
    /// Lower-case and trim every keyword
    fn normalize(&mut self) {
        for list in [&mut self.financial, &mut self.inventory] {
            for keyword in list.iter_mut() {
                *keyword = keyword.trim().to_lowercase();
            }
        }
    }
}

impl ReportConfig {
    /// Create a configuration for explicit input and output paths
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: ReportConfig = toml::from_str(content)?;
        config.keywords.normalize();
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.sample_rows == 0 {
            anyhow::bail!("Configuration error: 'sample_rows' must be at least 1");
        }

        for (list_name, list) in [
            ("financial", &self.keywords.financial),
            ("inventory", &self.keywords.inventory),
        ] {
            if list.iter().any(|k| k.trim().is_empty()) {
                anyhow::bail!(
                    "Configuration error: empty keyword in keywords.{}",
                    list_name
                );
            }
        }

        Ok(())
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
