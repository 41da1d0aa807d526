use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::config::ColumnConfig;
use crate::dataset::{Scalar, TabularDataset};
use crate::error_handler::ReportError;

/// One student who missed at least one assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub group: Scalar,
    pub email: String,
    /// Assignment column names, in sheet order. Never empty.
    pub missed: Vec<String>,
}

impl StudentRecord {
    /// `"{name}, {group}, {email}"`
    pub fn heading(&self) -> String {
        format!("{}, {}, {}", self.name, self.group, self.email)
    }
}

/// Scan `dataset` and return one record per row with at least one score of 0.
///
/// Blank scores are not misses. Output order follows row order.
pub fn generate_missed_homework_report(
    dataset: &TabularDataset,
    config: &ColumnConfig,
) -> Result<Vec<StudentRecord>, ReportError> {
    let missing: BTreeSet<&str> = config
        .identity_columns()
        .into_iter()
        .filter(|name| !dataset.has_column(name))
        .collect();
    if !missing.is_empty() {
        return Err(ReportError::MissingColumns {
            columns: missing.into_iter().map(String::from).collect(),
        });
    }

    let start = config.scores_start_index;
    if start >= dataset.column_count() {
        return Err(ReportError::NoAssignmentColumns {
            start_index: start,
            column_count: dataset.column_count(),
        });
    }

    // Presence was checked above, so these lookups cannot fail.
    let [first_idx, last_idx, group_idx, email_idx] = config
        .identity_columns()
        .map(|name| dataset.column_index(name).unwrap_or_default());
    let score_columns = &dataset.columns()[start..];

    let mut records = Vec::new();
    for row in dataset.rows() {
        let missed: Vec<String> = score_columns
            .iter()
            .zip(&row[start..])
            .filter(|(_, value)| !value.is_blank() && value.is_numeric_zero())
            .map(|(column, _)| column.clone())
            .collect();

        if missed.is_empty() {
            continue;
        }

        let name = format!(
            "{} {}",
            row[first_idx].trimmed_text(),
            row[last_idx].trimmed_text()
        )
        .trim()
        .to_string();

        records.push(StudentRecord {
            name,
            group: row[group_idx].clone(),
            email: row[email_idx].trimmed_text(),
            missed,
        });
    }

    debug!(
        "Scanned {} row(s) over {} assignment column(s); {} student(s) missed work",
        dataset.row_count(),
        score_columns.len(),
        records.len()
    );

    Ok(records)
}
