//! Spreadsheet and CSV decoding into a [`TabularDataset`].
//!
//! The first row is the header row. Entirely empty rows are skipped, blank
//! headers become `Unnamed: {index}`, and repeated headers get a `.{n}`
//! suffix so column names stay unique. Column positions match the sheet,
//! including empty leading columns, and short CSV rows are padded with blanks.

use std::collections::HashSet;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use hwreport_core::{DatasetError, Scalar, TabularDataset};
use thiserror::Error;
use tracing::debug;

const SPREADSHEET_EXTENSIONS: [&str; 7] = ["xlsx", "xlsm", "xlsb", "xls", "xla", "xlam", "ods"];

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unsupported input format '{name}'; expected .xlsx, .xlsm, .xlsb, .xls, .ods or .csv")]
    UnsupportedFormat { name: String },

    #[error("Sheet '{0}' not found")]
    SheetNotFound(String),

    #[error("Empty sheet or missing header row")]
    EmptySheet,

    #[error("Could not read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Could not read CSV file: {0:#}")]
    Csv(#[from] anyhow::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Dataset(#[from] DatasetError),
}

/// Load `path` into a dataset, picking the reader from the file extension.
///
/// `sheet` selects a worksheet by name; the first worksheet is used otherwise.
/// CSV input ignores `sheet`.
pub fn load_dataset(path: &Path, sheet: Option<&str>) -> Result<TabularDataset, DecodeError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if extension == "csv" {
        load_csv(path)
    } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        load_spreadsheet(path, sheet)
    } else {
        Err(DecodeError::UnsupportedFormat {
            name: path.display().to_string(),
        })
    }
}

fn load_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<TabularDataset, DecodeError> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(DecodeError::SheetNotFound(name.to_string()));
            }
            workbook.worksheet_range(name)?
        }
        None => workbook.worksheet_range_at(0).ok_or(DecodeError::EmptySheet)??,
    };

    // The range starts at the first used cell; empty leading columns still
    // count toward column positions.
    let leading = range.start().map_or(0, |(_, col)| col as usize);

    let mut rows = range.rows();
    let header = rows.next().ok_or(DecodeError::EmptySheet)?;
    let columns = header_names(
        std::iter::repeat_n(String::new(), leading).chain(header.iter().map(|cell| match cell {
            Data::Empty => String::new(),
            other => other.to_string(),
        })),
    );

    let values: Vec<Vec<Scalar>> = rows
        .map(|row| {
            std::iter::repeat_n(Scalar::Empty, leading)
                .chain(row.iter().map(cell_to_scalar))
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.iter().all(Scalar::is_blank))
        .collect();

    debug!(
        "Decoded {} data row(s) from {}",
        values.len(),
        path.display()
    );
    Ok(TabularDataset::new(columns, values)?)
}

fn load_csv(path: &Path) -> Result<TabularDataset, DecodeError> {
    let text = std::fs::read_to_string(path)?;
    let (headers, rows) = hwreport_docs::parse_csv(&text)?;
    if headers.is_empty() {
        return Err(DecodeError::EmptySheet);
    }

    let width = headers.len();
    let columns = header_names(headers.into_iter());
    // Short rows are padded with blanks; long rows fail the width check.
    let values: Vec<Vec<Scalar>> = rows
        .iter()
        .map(|row| {
            let mut cells: Vec<Scalar> = row.iter().map(|cell| Scalar::infer(cell)).collect();
            if cells.len() < width {
                cells.resize(width, Scalar::Empty);
            }
            cells
        })
        .filter(|row| !row.iter().all(Scalar::is_blank))
        .collect();

    debug!(
        "Decoded {} data row(s) from {}",
        values.len(),
        path.display()
    );
    Ok(TabularDataset::new(columns, values)?)
}

fn cell_to_scalar(cell: &Data) -> Scalar {
    match cell {
        Data::Int(i) => Scalar::Int(*i),
        Data::Float(f) => Scalar::Float(*f),
        Data::String(s) if s.trim().is_empty() => Scalar::Empty,
        Data::String(s) => Scalar::Text(s.clone()),
        Data::Empty | Data::Error(_) => Scalar::Empty,
        other => Scalar::Text(other.to_string()),
    }
}

/// Trim header cells, name blank ones by position and de-duplicate repeats.
fn header_names(raw: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.enumerate()
        .map(|(idx, name)| {
            let name = name.trim();
            let base = if name.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name.to_string()
            };

            let mut candidate = base.clone();
            let mut suffix = 1;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{base}.{suffix}");
                suffix += 1;
            }
            candidate
        })
        .collect()
}
