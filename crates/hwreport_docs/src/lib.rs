// Report rendering: DOCX report, mail-merge CSV, Markdown and XLSX previews

pub mod csv;
pub mod docx;
pub mod markdown;
pub mod xlsx;

pub use crate::csv::{parse_csv, render_mail_merge_csv};
pub use crate::docx::render_missed_homework_document;
