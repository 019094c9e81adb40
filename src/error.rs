//! Error types for cvarcfg library

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for cvarcfg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cvarcfg library
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to create config file {}: {source}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Path Errors
    // -------------------------------------------------------------------------
    #[error("Invalid config name: {0}")]
    InvalidConfigName(String),

    #[error("Invalid config directory: {0}")]
    InvalidConfigDir(String),
}

impl Error {
    /// Check if this is a file I/O error
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Error::FileCreate { .. } | Error::FileRead { .. })
    }

    /// Path of the file involved, for I/O errors
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::FileCreate { path, .. } | Error::FileRead { path, .. } => Some(path),
            _ => None,
        }
    }
}

// =============================================================================
// Filesystem Helper Functions
// =============================================================================
// These reduce repetitive map_err patterns in the config module.

/// Open a file for reading with proper error handling
pub(crate) fn open_file(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Wrap an I/O failure that happened while producing a config file
pub(crate) fn create_failed(path: &Path, source: std::io::Error) -> Error {
    Error::FileCreate {
        path: path.to_path_buf(),
        source,
    }
}
