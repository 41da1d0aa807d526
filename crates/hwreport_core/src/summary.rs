use serde::Serialize;

use crate::dataset::Scalar;
use crate::report::StudentRecord;

pub const PREVIEW_HEADERS: [&str; 4] = ["Student", "Group", "Email", "Missed assignments"];

/// Headline numbers shown next to the preview table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReportSummary {
    pub students: usize,
    pub total_missed: usize,
}

impl ReportSummary {
    pub fn from_records(records: &[StudentRecord]) -> Self {
        Self {
            students: records.len(),
            total_missed: records.iter().map(|r| r.missed.len()).sum(),
        }
    }
}

/// Flatten records into typed preview cells matching [`PREVIEW_HEADERS`].
///
/// Only the group keeps its decoded type; every other cell is text.
pub fn preview_cells(records: &[StudentRecord]) -> Vec<Vec<Scalar>> {
    records
        .iter()
        .map(|r| {
            vec![
                Scalar::Text(r.name.clone()),
                r.group.clone(),
                Scalar::Text(r.email.clone()),
                Scalar::Text(r.missed.join(", ")),
            ]
        })
        .collect()
}

/// Preview cells rendered as display strings.
pub fn preview_rows(records: &[StudentRecord]) -> Vec<Vec<String>> {
    preview_cells(records)
        .into_iter()
        .map(|row| row.iter().map(Scalar::to_string).collect())
        .collect()
}
