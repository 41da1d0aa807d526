pub mod config;
pub mod dataset;
pub mod error_handler;
pub mod logging;
pub mod mail_merge;
pub mod report;
pub mod summary;

pub use config::{ColumnConfig, DEFAULT_TITLE, ReportConfig};
pub use dataset::{DatasetError, Scalar, TabularDataset};
pub use error_handler::ReportError;
pub use mail_merge::{MAIL_MERGE_HEADERS, MailMergeRow, build_mail_merge_rows};
pub use report::{StudentRecord, generate_missed_homework_report};
pub use summary::{PREVIEW_HEADERS, ReportSummary, preview_cells, preview_rows};
