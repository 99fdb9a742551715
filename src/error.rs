//! Error types for the asset pipeline
//!
//! Uses `thiserror` for library errors. Every failure in the pipeline is
//! fatal: there are no retries and no partial-success states.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type BakeResult<T> = Result<T, BakeError>;

/// Main error type for pipeline operations
#[derive(Error, Debug)]
pub enum BakeError {
    /// Root directory for a manifest scan is missing
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// External tool binary could not be located
    #[error("external tool not found: {path} - check tools_dir/binary_path in the bake config")]
    ToolMissing { path: PathBuf },

    /// External tool could not be launched
    #[error("failed to launch '{program}': {message}")]
    ToolLaunch { program: String, message: String },

    /// External tool ran but exited non-zero
    #[error("'{program}' failed with {status}")]
    ToolFailed { program: String, status: ExitStatus },

    /// Input file stem does not form a valid C identifier
    #[error("'{stem}' from {file} is not a valid identifier for an embedded symbol")]
    BadSymbolName { stem: String, file: PathBuf },

    /// Payload collides with every candidate raw-string delimiter
    #[error("contents of {file} collide with every raw string delimiter - cannot embed as text")]
    DelimiterCollision { file: PathBuf },

    /// Text-mode embedding requires UTF-8 input
    #[error("{file} is not valid UTF-8 - use binary mode to embed it")]
    NonUtf8Text { file: PathBuf },

    /// Invalid bake configuration file
    #[error("invalid bake config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
