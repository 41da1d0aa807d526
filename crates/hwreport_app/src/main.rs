use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use hwreport_app::cli::Cli;
use hwreport_app::run;
use hwreport_core::ReportError;
use hwreport_core::logging;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply_to(&mut config);

    // Reports are still produced when the log directory is unavailable.
    let _log_guard = logging::init_logging(&config.log_level)
        .inspect_err(|e| eprintln!("Warning: logging disabled: {e:#}"))
        .ok();
    info!("Starting hwreport v{VERSION}");
    if config.title.trim().is_empty() {
        warn!("Blank report title; using \"{}\"", config.effective_title());
    }

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &config, &mut stdout) {
        Ok(outcome) => {
            eprintln!("Word report: {}", outcome.docx_path.display());
            if let Some(path) = &outcome.csv_path {
                eprintln!("Mail merge CSV: {}", path.display());
            }
            if let Some(path) = &outcome.preview_xlsx_path {
                eprintln!("Preview workbook: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Report generation failed: {e:#}");
            match e.downcast_ref::<ReportError>() {
                Some(report_error) => eprintln!("Error: {}", report_error.user_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
