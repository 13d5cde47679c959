//! Configuration discovery and loading
//!
//! This module handles the configuration discovery hierarchy:
//! 1. Current directory: ./actionize.toml or ./.actionize/config.toml
//! 2. User config: ~/.actionize/config.toml
//! 3. System config: /etc/actionize/config.toml
//! 4. Built-in defaults

use crate::env;
use serde::{Deserialize, Serialize};
use std::env as std_env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config '{}' is not valid TOML: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where and under which names reports are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub markdown_file: String,
    pub json_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(env::output::DEFAULT_DIR_NAME),
            markdown_file: env::output::MARKDOWN_FILE_NAME.to_string(),
            json_file: env::output::JSON_FILE_NAME.to_string(),
        }
    }
}

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionizeConfig {
    pub output: OutputConfig,
}

impl ActionizeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to TOML file
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Configuration discovery system
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover and load configuration using the hierarchy
    pub fn discover_config() -> Result<ActionizeConfig, ConfigError> {
        if let Some(config_path) = Self::find_config_file() {
            info!("Loading configuration from: {:?}", config_path);
            return ActionizeConfig::from_toml_file(config_path);
        }

        debug!("No configuration file found, using defaults");
        Ok(ActionizeConfig::default())
    }

    /// Load `explicit` when given, otherwise fall back to discovery.
    pub fn load(explicit: Option<&Path>) -> Result<ActionizeConfig, ConfigError> {
        match explicit {
            Some(path) => {
                info!("Loading configuration override from: {:?}", path);
                ActionizeConfig::from_toml_file(path)
            }
            None => Self::discover_config(),
        }
    }

    /// Find configuration file using discovery hierarchy
    pub fn find_config_file() -> Option<PathBuf> {
        let current_dir = std_env::current_dir().ok();
        let home_dir = Self::get_home_dir();
        Self::first_existing(&Self::config_candidates(
            current_dir.as_deref(),
            home_dir.as_deref(),
        ))
    }

    fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
        for candidate in candidates {
            debug!("Checking for config file: {:?}", candidate);
            if candidate.is_file() {
                debug!("Found config file: {:?}", candidate);
                return Some(candidate.clone());
            }
        }

        debug!("No config file found in discovery hierarchy");
        None
    }

    /// List of configuration file candidates in priority order
    fn config_candidates(current_dir: Option<&Path>, home_dir: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(current_dir) = current_dir {
            candidates.push(current_dir.join(env::LOCAL_CONFIG_FILE_NAME));
            candidates.push(env::local_config_file_path(current_dir));
        }

        if let Some(home_dir) = home_dir {
            candidates.push(env::user_config_file_path(home_dir));
        }

        #[cfg(unix)]
        candidates.push(PathBuf::from("/etc/actionize/config.toml"));

        #[cfg(windows)]
        if let Ok(program_data) = std_env::var("PROGRAMDATA") {
            candidates.push(PathBuf::from(program_data).join("actionize").join("config.toml"));
        }

        candidates
    }

    fn get_home_dir() -> Option<PathBuf> {
        std_env::var("HOME")
            .ok()
            .or_else(|| std_env::var("USERPROFILE").ok())
            .map(PathBuf::from)
    }
}
