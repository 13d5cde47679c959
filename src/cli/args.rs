//! Command line argument parsing
//!
//! `actionize <INPUT_FILE> [--out DIR] [--config FILE] [--today DATE] [-v]`

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use super::config::ActionizeConfig;
use super::run::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "actionize")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse meeting notes and extract structured action items.")]
#[command(long_about = None)]
pub struct Args {
    /// Path to the meeting-notes file (plain text or Markdown)
    pub input_file: PathBuf,

    /// Output directory for generated files (default: ./out)
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Configuration file path (skips config discovery)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reference date for relative due dates like "next Friday" (default: today)
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Merge the arguments with the loaded configuration. Flags win over config values.
    pub fn run_options(&self, config: &ActionizeConfig, today: NaiveDate) -> RunOptions {
        RunOptions {
            input_file: self.input_file.clone(),
            output_dir: self
                .out
                .clone()
                .unwrap_or_else(|| config.output.directory.clone()),
            markdown_file: config.output.markdown_file.clone(),
            json_file: config.output.json_file.clone(),
            today: self.today.unwrap_or(today),
        }
    }
}
