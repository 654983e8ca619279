use anyhow::{Context, Result};
use clap::Parser;
use sheetbrief_core::{Outcome, ReportConfig};
use std::path::PathBuf;

mod console;

/// Configuration file picked up from the working directory
const DEFAULT_CONFIG_FILE: &str = "sheetbrief.toml";

#[derive(Parser)]
#[command(name = "sheetbrief")]
#[command(about = "Summarize workbook structure into a report you can redact before sharing", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file [default: "Venstas Pagos.xlsm"]
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Report file to write [default: INFORME_ESTRUCTURA_POS.txt]
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of data rows read below each header
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Exit with a non-zero code when no report is produced
    #[arg(long)]
    strict: bool,
}

impl Cli {
    /// Resolve the run configuration: defaults, then config file, then flags
    fn load_config(&self) -> Result<ReportConfig> {
        // Load configuration
        let mut config = if let Some(config_path) = &self.config {
            ReportConfig::from_file(config_path)
                .with_context(|| format!("Failed to load config from {}", config_path.display()))?
        } else {
            let default_config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_config_path.exists() {
                ReportConfig::from_file(&default_config_path).with_context(|| {
                    format!(
                        "Failed to load config from {}",
                        default_config_path.display()
                    )
                })?
            } else {
                ReportConfig::default()
            }
        };

        // Command line flags win over the file
        if let Some(file) = &self.file {
            config.input = file.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(rows) = self.rows {
            config.sample_rows = rows;
        }

        // Validate configuration
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetbrief=warn,sheetbrief_core=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    tracing::debug!(?config, "resolved configuration");

    // Build and write the report
    let outcome = sheetbrief_core::run(&config);
    console::print_outcome(&outcome);

    // Exit with appropriate code
    let exit_code = if cli.strict { exit_code(&outcome) } else { 0 };
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

fn exit_code(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Success { .. } => 0,
        Outcome::MissingInput { .. } => 1,
        Outcome::ProcessingFailure { .. } => 2,
    }
}
