// ABOUTME: Error types for output formatting and writing
// ABOUTME: Defines specific error types for output module operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output to '{path}': {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, OutputError>;
