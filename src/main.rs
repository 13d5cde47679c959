use actionize::cli::{Args, run_cli};
use actionize::env::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use anyhow::Context;
use chrono::Local;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    info!("Starting actionize");

    let today = Local::now().date_naive();
    match run_cli(&args, today) {
        Ok(summary) => {
            println!("Extracted {} action item(s).", summary.item_count);
            println!("  Markdown -> {}", summary.markdown_path.display());
            println!("  JSON     -> {}", summary.json_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only carries the run summary.
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialize logging")
}
