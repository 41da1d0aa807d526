pub mod cli;
pub mod decode;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hwreport_core::{
    PREVIEW_HEADERS, ReportConfig, ReportSummary, StudentRecord, build_mail_merge_rows,
    generate_missed_homework_report, preview_cells, preview_rows,
};
use hwreport_docs::markdown::generate_markdown_table;
use hwreport_docs::xlsx::generate_preview_xlsx;
use hwreport_docs::{render_mail_merge_csv, render_missed_homework_document};
use tracing::info;

use crate::cli::Cli;

/// What a run produced, for callers that want more than the files.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub records: Vec<StudentRecord>,
    pub summary: ReportSummary,
    pub docx_path: PathBuf,
    /// `None` when nobody missed anything.
    pub csv_path: Option<PathBuf>,
    pub preview_xlsx_path: Option<PathBuf>,
}

/// Decode the input, extract records, and write every requested artifact.
///
/// `config` must already have the CLI overrides applied. Human-readable
/// output (summary and preview table, or JSON) goes to `out`.
pub fn run(cli: &Cli, config: &ReportConfig, out: &mut impl Write) -> Result<RunOutcome> {
    let dataset = decode::load_dataset(&cli.input, cli.sheet.as_deref())
        .with_context(|| format!("Could not read {}", cli.input.display()))?;
    info!(
        "Loaded {} row(s) x {} column(s) from {}",
        dataset.row_count(),
        dataset.column_count(),
        cli.input.display()
    );

    let records = generate_missed_homework_report(&dataset, &config.columns)?;
    let summary = ReportSummary::from_records(&records);
    info!(
        "{} student(s) with {} missed item(s)",
        summary.students, summary.total_missed
    );

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &records).context("Failed to write JSON")?;
        writeln!(out)?;
    } else if !cli.no_preview {
        write_preview(out, &records, &summary)?;
    }

    let docx = render_missed_homework_document(&records, config.effective_title())?;
    write_artifact(&config.docx_path, &docx)?;

    let csv_path = if records.is_empty() {
        info!("No missed homework; skipping mail merge CSV");
        None
    } else {
        let csv = render_mail_merge_csv(&build_mail_merge_rows(&records))?;
        write_artifact(&config.csv_path, &csv)?;
        Some(config.csv_path.clone())
    };

    let preview_xlsx_path = match &cli.preview_xlsx {
        Some(path) => {
            let xlsx = generate_preview_xlsx(&PREVIEW_HEADERS, &preview_cells(&records))?;
            write_artifact(path, &xlsx)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(RunOutcome {
        records,
        summary,
        docx_path: config.docx_path.clone(),
        csv_path,
        preview_xlsx_path,
    })
}

fn write_preview(
    out: &mut impl Write,
    records: &[StudentRecord],
    summary: &ReportSummary,
) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "No students with missed homework (score = 0) were found.")?;
        return Ok(());
    }

    writeln!(out, "Students with misses: {}", summary.students)?;
    writeln!(out, "Total missed items:   {}", summary.total_missed)?;
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        generate_markdown_table(&PREVIEW_HEADERS, &preview_rows(records))
    )?;
    Ok(())
}

fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
