use thiserror::Error;

/// Errors raised by the extractor before any row is processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Missing required column(s): {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error(
        "No assignment columns detected. Expected assignment columns from column index {start_index} onward."
    )]
    NoAssignmentColumns {
        start_index: usize,
        column_count: usize,
    },
}

impl ReportError {
    /// Single line telling the user what to fix before retrying.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingColumns { .. } => {
                format!("{self}. Column names must match the spreadsheet headers exactly.")
            }
            Self::NoAssignmentColumns { column_count, .. } => {
                format!("{self} The sheet only has {column_count} column(s).")
            }
        }
    }
}
