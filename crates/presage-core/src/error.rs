//! Error types for Presage

use thiserror::Error;

use crate::ActionId;

/// Core Presage errors
#[derive(Error, Debug)]
pub enum PresageError {
    // Resolution errors
    #[error("success resolution for action {0} with no pending optimism")]
    OrphanSuccess(ActionId),

    #[error("failure resolution for action {0} with no pending optimism")]
    OrphanFailure(ActionId),
}

/// Result type for Presage operations
pub type PresageResult<T> = Result<T, PresageError>;
