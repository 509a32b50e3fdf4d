//! Error types for lpp-facts

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// A level that looked like a VRMF (four dot-separated segments) but
    /// did not parse as integers.
    #[error("Corrupt fileset level '{level}': {reason}")]
    Integrity { level: String, reason: String },

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LppError>;
