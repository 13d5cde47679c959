//! End-to-end pipeline behind the binary: read notes, extract, write reports.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::args::Args;
use super::config::{ConfigDiscovery, ConfigError};
use super::input::{InputError, NotesDocument};
use crate::notes::NotesParser;
use crate::report::{render_json, render_markdown};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render JSON report: {0}")]
    Render(#[from] serde_json::Error),
}

impl RunError {
    /// True when the failure is the input file not existing.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, RunError::Input(InputError::NotFound { .. }))
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub markdown_file: String,
    pub json_file: String,
    pub today: NaiveDate,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub item_count: usize,
    pub markdown_path: PathBuf,
    pub json_path: PathBuf,
}

/// Load configuration for `args` (explicit file or discovery) and run the pipeline.
pub fn run_cli(args: &Args, today: NaiveDate) -> Result<RunSummary, RunError> {
    let config = ConfigDiscovery::load(args.config.as_deref())?;
    let options = args.run_options(&config, today);
    debug!("Resolved run options: {:?}", options);
    run(&options)
}

/// Parse the input file and write both reports into the output directory.
///
/// The input is checked before anything is created, so a missing input
/// leaves the file system untouched.
pub fn run(options: &RunOptions) -> Result<RunSummary, RunError> {
    let document = NotesDocument::load(&options.input_file)?;

    let items = NotesParser::new(options.today).parse(&document.content);
    info!(
        "Extracted {} action item(s) from {:?}",
        items.len(),
        document.path
    );

    let markdown = render_markdown(&items);
    let json = render_json(&items)?;

    fs::create_dir_all(&options.output_dir).map_err(|source| RunError::CreateOutputDir {
        path: options.output_dir.clone(),
        source,
    })?;

    let markdown_path = options.output_dir.join(&options.markdown_file);
    write_report(&markdown_path, &markdown)?;

    let json_path = options.output_dir.join(&options.json_file);
    write_report(&json_path, &json)?;

    Ok(RunSummary {
        item_count: items.len(),
        markdown_path,
        json_path,
    })
}

fn write_report(path: &Path, content: &str) -> Result<(), RunError> {
    debug!("Writing {} bytes to {:?}", content.len(), path);
    fs::write(path, content).map_err(|source| RunError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
