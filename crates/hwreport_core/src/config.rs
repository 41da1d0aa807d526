use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_TITLE: &str = "Missed Homework Report";

// ---------------------------------------------------------------------------
// ColumnConfig
// ---------------------------------------------------------------------------

/// Which spreadsheet headers identify a student, and where scores begin.
///
/// Every column at or after `scores_start_index` (0-based, dataset order) is
/// treated as an assignment score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub first_name: String,
    pub last_name: String,
    pub group: String,
    pub email: String,
    pub scores_start_index: usize,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            first_name: "First Name".into(),
            last_name: "Last Name".into(),
            group: "Group".into(),
            email: "Email".into(),
            scores_start_index: 4,
        }
    }
}

impl ColumnConfig {
    /// The four identity column names in a fixed order.
    pub fn identity_columns(&self) -> [&str; 4] {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.group.as_str(),
            self.email.as_str(),
        ]
    }
}

// ---------------------------------------------------------------------------
// ReportConfig
// ---------------------------------------------------------------------------

/// Front-end settings stored at `~/.hwreport/config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub columns: ColumnConfig,
    pub docx_path: PathBuf,
    pub csv_path: PathBuf,
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            columns: ColumnConfig::default(),
            docx_path: PathBuf::from("missed_homework_report.docx"),
            csv_path: PathBuf::from("mail_merge_data.csv"),
            log_level: "info".into(),
        }
    }
}

impl ReportConfig {
    /// Returns the base config directory: `~/.hwreport/`
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".hwreport"))
    }

    /// Returns the config file path: `~/.hwreport/config.json`
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.json"))
    }

    /// Returns the logs directory: `~/.hwreport/logs/`
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("logs"))
    }

    /// Ensures all required directories exist.
    pub fn ensure_dirs() -> Result<()> {
        for dir in [Self::base_dir()?, Self::logs_dir()?] {
            if !dir.exists() {
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
            }
        }
        Ok(())
    }

    /// Loads config from disk, or creates default if missing.
    pub fn load() -> Result<Self> {
        Self::ensure_dirs()?;
        let path = Self::config_path()?;
        Self::load_from_path(&path)
    }

    /// Load config from a specific file path, writing defaults there if absent.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let config: Self = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to_path(path)?;
            info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Save config to a specific file path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Title used for the document; a blank title falls back to the default.
    pub fn effective_title(&self) -> &str {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            DEFAULT_TITLE
        } else {
            trimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_column_config() {
        let cols = ColumnConfig::default();
        assert_eq!(
            cols.identity_columns(),
            ["First Name", "Last Name", "Group", "Email"]
        );
        assert_eq!(cols.scores_start_index, 4);
    }

    #[test]
    fn test_load_creates_default_when_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.json");

        let config = ReportConfig::load_from_path(&path).unwrap();
        assert_eq!(config, ReportConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_roundtrip_custom_values() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");

        let mut config = ReportConfig::default();
        config.title = "Week 5".into();
        config.columns.email = "E-mail".into();
        config.columns.scores_start_index = 6;
        config.save_to_path(&path).unwrap();

        let loaded = ReportConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"columns": {"group": "Section"}}"#).unwrap();

        let loaded = ReportConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.columns.group, "Section");
        assert_eq!(loaded.columns.first_name, "First Name");
        assert_eq!(loaded.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_corrupted_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "not-valid-json{{{").unwrap();

        let err = ReportConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_effective_title_falls_back() {
        let mut config = ReportConfig::default();
        config.title = "   ".into();
        assert_eq!(config.effective_title(), DEFAULT_TITLE);
        config.title = "  Unit 3  ".into();
        assert_eq!(config.effective_title(), "Unit 3");
    }
}
