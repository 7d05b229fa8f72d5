//! Error types for stream pipelines.

use thiserror::Error;

/// Result type alias for fallible stream operations
pub type Result<T> = std::result::Result<T, StreamError>;

/// Errors surfaced by the pipeline and its collaborators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// A value was requested from an empty [`Optional`](crate::Optional)
    #[error("there is no such element")]
    NoSuchElement,

    /// A [`StreamConfig`](crate::StreamConfig) failed validation
    #[error("invalid stream configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration
        reason: String,
    },
}

impl StreamError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        StreamError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
