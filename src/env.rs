//! Environment constants and path utilities for actionize.
//!
//! This module centralizes the file and directory names used throughout
//! the application, making them easier to maintain and modify.

use std::path::{Path, PathBuf};

/// Hidden per-project/per-user directory name (like .git, .vscode)
pub const ACTIONIZE_DIR_NAME: &str = ".actionize";

/// Configuration file name inside the actionize directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration file name looked up directly in the working directory
pub const LOCAL_CONFIG_FILE_NAME: &str = "actionize.toml";

/// Output-related defaults
pub mod output {
    /// Default output directory, relative to the working directory
    pub const DEFAULT_DIR_NAME: &str = "out";

    /// Markdown report file name
    pub const MARKDOWN_FILE_NAME: &str = "action_items.md";

    /// JSON report file name
    pub const JSON_FILE_NAME: &str = "action_items.json";
}

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "actionize=info";

/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "actionize=debug";

/// Build the config file path in the user's home directory
pub fn user_config_file_path(home_dir: &Path) -> PathBuf {
    home_dir.join(ACTIONIZE_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Build the hidden-directory config file path in the current directory
pub fn local_config_file_path(current_dir: &Path) -> PathBuf {
    current_dir.join(ACTIONIZE_DIR_NAME).join(CONFIG_FILE_NAME)
}
