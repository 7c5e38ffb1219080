//! Error types
//!
//! Only configuration handling is fallible. Graph construction, ranking,
//! phrase extraction and summarization degrade to empty results instead.

use thiserror::Error;

/// Errors raised while building or loading a configuration
#[derive(Debug, Error)]
pub enum TextRankError {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A JSON configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextRankError {
    /// Shorthand for [`TextRankError::InvalidConfig`]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, TextRankError>;
