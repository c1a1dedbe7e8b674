//! Error types for swiftmeterlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting or formatting statistics
#[derive(Error, Debug)]
pub enum SwiftmeterError {
    /// Directory whose parent does not exist
    #[error("{0} is not a valid directory")]
    InvalidDirectory(PathBuf),

    /// Path is missing or not a regular file
    #[error("{0} is not a valid file path")]
    InvalidFile(PathBuf),

    /// File does not carry the `.swift` extension
    #[error("{0} is not a valid swift file")]
    NotSwiftFile(PathBuf),

    /// Badge input that does not serialize to a key/value mapping
    #[error("{0} is not a valid dictionary")]
    InvalidMapping(String),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize statistics
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
