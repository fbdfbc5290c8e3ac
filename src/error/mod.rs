//! Error types for Aromi.

use thiserror::Error;

/// Primary error type for all Aromi operations.
#[derive(Error, Debug)]
pub enum AromiError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Tool execution error: {tool_name}: {message}")]
    ToolExecution { tool_name: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),
}

impl AromiError {
    /// Create an API error for a non-success response.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Whether this error originated at a remote collaborator rather than
    /// locally. Remote failures are folded into values at the transport and
    /// dispatch boundaries; local ones indicate a caller bug.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::Network(_) | Self::Timeout(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AromiError>;
