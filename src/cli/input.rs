//! Meeting-notes input loading
//!
//! Reads the notes document as UTF-8 text, distinguishing a missing file
//! from unreadable or binary content.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("input file '{}' is not UTF-8 encoded: {hint}", path.display())]
    NotUtf8 { path: PathBuf, hint: String },

    #[error("IO error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A meeting-notes document loaded from disk
#[derive(Debug, Clone)]
pub struct NotesDocument {
    pub path: PathBuf,
    pub content: String,
}

impl NotesDocument {
    /// Load a notes file. Anything that is not an existing regular file is reported as not found.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref().to_path_buf();

        if !path.is_file() {
            return Err(InputError::NotFound { path });
        }

        debug!("Loading notes from: {:?}", path);

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Loaded {} bytes from {:?}", content.len(), path);
                Ok(Self { path, content })
            }
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Err(InputError::NotFound { path }),
                std::io::ErrorKind::InvalidData => Err(InputError::NotUtf8 {
                    path,
                    hint: "File appears to be binary. Only UTF-8 text or Markdown notes are supported."
                        .to_string(),
                }),
                _ => Err(InputError::Io { path, source: e }),
            },
        }
    }
}
