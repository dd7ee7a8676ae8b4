//! Error types for numsort

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumsortError {
    #[error("Error reading input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid number '{token}' at position {position}")]
    Parse { token: String, position: usize },

    #[error("Delimiter must not be empty")]
    InvalidDelimiter,

    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("Prompt error: {0}")]
    Prompt(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, NumsortError>;
