//! CLI-specific functionality for actionize
//!
//! This module contains all CLI-related code including argument parsing,
//! notes input handling, configuration discovery and the run pipeline.

pub mod args;
pub mod config;
pub mod input;
pub mod run;

pub use args::Args;
pub use config::{ActionizeConfig, ConfigDiscovery, ConfigError, OutputConfig};
pub use input::{InputError, NotesDocument};
pub use run::{RunError, RunOptions, RunSummary, run, run_cli};
