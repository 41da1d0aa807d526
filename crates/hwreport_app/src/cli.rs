//! Command-line arguments. Flags override the JSON config file.

use clap::Parser;
use hwreport_core::ReportConfig;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "hwreport")]
#[command(about = "List students with a score of 0 on any assignment as a Word report and a mail merge CSV")]
#[command(version)]
pub struct Cli {
    /// Gradebook file (.xlsx, .xlsm, .xlsb, .xls, .ods or .csv)
    pub input: PathBuf,

    /// Worksheet to read (defaults to the first one)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Report title
    #[arg(short, long)]
    pub title: Option<String>,

    /// First name column header
    #[arg(long)]
    pub first_name_col: Option<String>,

    /// Last name column header
    #[arg(long)]
    pub last_name_col: Option<String>,

    /// Group column header
    #[arg(long)]
    pub group_col: Option<String>,

    /// Email column header
    #[arg(long)]
    pub email_col: Option<String>,

    /// 0-based index of the first assignment column (4 means the 5th column onward)
    #[arg(long)]
    pub scores_start: Option<usize>,

    /// Where to write the Word report
    #[arg(long)]
    pub docx: Option<PathBuf>,

    /// Where to write the mail merge CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Also export the preview table as an XLSX workbook
    #[arg(long)]
    pub preview_xlsx: Option<PathBuf>,

    /// Print the detected records as JSON instead of the preview table
    #[arg(long, conflicts_with = "no_preview")]
    pub json: bool,

    /// Do not print the preview table
    #[arg(long)]
    pub no_preview: bool,

    /// Path to configuration file (defaults to ~/.hwreport/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level or tracing filter (overrides the config file; RUST_LOG wins over both)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file named by `--config`, or the default one.
    pub fn load_config(&self) -> anyhow::Result<ReportConfig> {
        match &self.config {
            Some(path) => ReportConfig::load_from_path(path),
            None => ReportConfig::load(),
        }
    }

    /// Overlay the flags that were given on top of `config`.
    pub fn apply_to(&self, config: &mut ReportConfig) {
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(col) = &self.first_name_col {
            config.columns.first_name = col.clone();
        }
        if let Some(col) = &self.last_name_col {
            config.columns.last_name = col.clone();
        }
        if let Some(col) = &self.group_col {
            config.columns.group = col.clone();
        }
        if let Some(col) = &self.email_col {
            config.columns.email = col.clone();
        }
        if let Some(idx) = self.scores_start {
            config.columns.scores_start_index = idx;
        }
        if let Some(path) = &self.docx {
            config.docx_path = path.clone();
        }
        if let Some(path) = &self.csv {
            config.csv_path = path.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}
