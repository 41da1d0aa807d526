use anyhow::{Context, Result};
use hwreport_core::{MAIL_MERGE_HEADERS, MailMergeRow};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render mail-merge rows as UTF-8 CSV with a byte-order mark.
///
/// Every field is quoted so the newline-joined assignment list stays inside
/// one cell. Records end with CRLF.
pub fn render_mail_merge_csv(rows: &[MailMergeRow]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .from_writer(UTF8_BOM.to_vec());

    writer
        .write_record(MAIL_MERGE_HEADERS)
        .context("Failed to write header record")?;

    for row in rows {
        writer
            .write_record(row.fields())
            .context("Failed to write data record")?;
    }

    writer.into_inner().context("Failed to flush CSV writer")
}

/// Parse a CSV string into headers and rows.
///
/// The first record is treated as the header row. A leading BOM is ignored.
/// Records may have a different field count than the header; callers decide
/// how to reconcile the width.
pub fn parse_csv(input: &str) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.context("Failed to read CSV record")?;
        let row: Vec<String> = record.iter().map(String::from).collect();
        rows.push(row);
    }

    Ok((headers, rows))
}
