//! Error types for racelint-ir
//!
//! Only input-construction failures surface here. Gaps discovered while
//! analyzing (an unresolved callee, an unlock without a lock) are logged and
//! skipped by the engine, never turned into errors.

use crate::config::ConfigError;
use crate::features::race_detection::AnalysisError;
use thiserror::Error;

/// Main error type for racelint-ir operations
#[derive(Debug, Error)]
pub enum RacelintError {
    /// IO error while reading a program or config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Program document is not valid JSON for the IR schema
    #[error("Program parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Program deserialized but violates a structural invariant
    #[error("Invalid program: {0}")]
    InvalidProgram(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The analysis could not be set up (e.g. no usable root set)
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

impl RacelintError {
    /// Create an invalid-program error
    pub fn invalid_program(msg: impl Into<String>) -> Self {
        RacelintError::InvalidProgram(msg.into())
    }
}

/// Result type alias for racelint operations
pub type Result<T> = std::result::Result<T, RacelintError>;
