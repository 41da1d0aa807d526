use anyhow::{Context, Result};
use hwreport_core::Scalar;
use rust_xlsxwriter::{Format, Workbook};

const SHEET_NAME: &str = "Missed Homework";

/// Generate an XLSX workbook holding the preview table.
///
/// Integer and finite float cells are written as numbers, text is always
/// written as a string, and blanks are left empty. The last column (the
/// joined assignment list) is wrapped.
pub fn generate_preview_xlsx(headers: &[&str], rows: &[Vec<Scalar>]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .with_context(|| format!("Failed to set sheet name: {SHEET_NAME}"))?;

    let header_format = Format::new().set_bold();
    let wrap_format = Format::new().set_text_wrap();
    let wrap_col = headers.len().saturating_sub(1);

    // Write header row
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .with_context(|| format!("Failed to write header at column {col}"))?;
    }

    // Write data rows
    for (row_idx, row) in rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col = col_idx as u16;
            let number = match cell {
                Scalar::Int(i) => Some(*i as f64),
                Scalar::Float(v) if v.is_finite() => Some(*v),
                _ => None,
            };

            if let Some(num) = number {
                worksheet
                    .write_number(excel_row, col, num)
                    .with_context(|| format!("Failed to write number at ({excel_row}, {col_idx})"))?;
            } else if cell.is_blank() {
                continue;
            } else if col_idx == wrap_col {
                worksheet
                    .write_string_with_format(excel_row, col, cell.to_string(), &wrap_format)
                    .with_context(|| format!("Failed to write string at ({excel_row}, {col_idx})"))?;
            } else {
                worksheet
                    .write_string(excel_row, col, cell.to_string())
                    .with_context(|| format!("Failed to write string at ({excel_row}, {col_idx})"))?;
            }
        }
    }

    // Auto-fit columns for readability
    worksheet.autofit();

    let bytes = workbook
        .save_to_buffer()
        .context("Failed to save workbook to buffer")?;

    Ok(bytes)
}
