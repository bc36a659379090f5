//! Error types for `TextLoader`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `TextLoader` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Table Errors ====================
    /// The text file exists but holds no bytes.
    #[error("text file is empty: {path}")]
    EmptyFile {
        /// The path of the empty file.
        path: PathBuf,
    },

    /// The separator is not a single ASCII character.
    #[error("invalid separator {0:?}: expected a single ASCII character")]
    InvalidSeparator(String),

    // ==================== Configuration Errors ====================
    /// The configuration file could not be parsed.
    #[error("invalid config {path}: {message}")]
    Config {
        /// The configuration file path.
        path: PathBuf,
        /// The parser's error message.
        message: String,
    },

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDir(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err.to_string())
    }
}

/// A specialized Result type for `TextLoader` operations.
pub type Result<T> = std::result::Result<T, Error>;
