//! Error types for the replay tool
//!
//! The cache itself never fails; everything here comes from reading scripts,
//! writing output or validating generator settings.

use thiserror::Error;

// == Replay Error Enum ==
/// Unified error type for script replay and generation.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// Reading a script or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A script line could not be parsed (1-based line number)
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Writing the CSV report failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generator settings are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ReplayError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        ReplayError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the replay tool.
pub type Result<T> = std::result::Result<T, ReplayError>;
