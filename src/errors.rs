use std::io;
use thiserror::Error;

/// Main engine error type.
///
/// The compute paths (search, filter, window) are designed to never fail:
/// malformed-but-well-typed input degrades to a non-match or a pass-through.
/// Errors only surface from host-facing edges such as config parsing and
/// item deserialization.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("File system error: {0}")]
    FileSystem(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Contract violation: {message}")]
    Contract { message: String },
}

/// Result type alias for convenience
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a contract violation error
    pub fn contract<S: Into<String>>(message: S) -> Self {
        Self::Contract {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            EngineError::Configuration { .. } => true, // Can use derived defaults
            EngineError::FileSystem(_) => true,        // Can retry or skip the override file
            EngineError::Json(_) => false,             // Indicates corrupt item payload
            EngineError::Contract { .. } => false,     // Caller bug
        }
    }

    /// Get a user-friendly message for display in UI
    pub fn user_message(&self) -> String {
        match self {
            EngineError::Configuration { message } => {
                format!("Configuration issue: {}", message)
            }
            EngineError::FileSystem(e) => match e.kind() {
                io::ErrorKind::NotFound => "Override file not found".to_string(),
                io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
                _ => format!("File system error: {}", e),
            },
            EngineError::Json(_) => "Item payload is corrupted.".to_string(),
            EngineError::Contract { message } => {
                format!("Internal contract violated: {}", message)
            }
        }
    }
}
