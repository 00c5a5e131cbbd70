//! Synchronizer error model.

use thiserror::Error;

/// Result type used across the synchronization layer.
pub type SyncResult<T> = Result<T, SyncError>;

/// Synchronizer construction error.
///
/// Key/entity disagreement is a state transition, not an error, so this stays
/// limited to misconfigured construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// A required constructor argument was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SyncError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
