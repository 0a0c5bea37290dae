use thiserror::Error;

use crate::storage::RepositoryError;

/// A save request is missing one of its required fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: week, member, picks")]
    MissingPickFields,
    #[error("Missing required fields: week, results")]
    MissingResultFields,
}

/// Errors surfaced by the contest operations.
///
/// Absent data is never an error: empty weeks and empty leaderboards come back
/// as empty maps.
#[derive(Debug, Error)]
pub enum ContestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store call failed. The cause is kept as `source()` for logging and
    /// stays out of the message.
    #[error("Store unavailable")]
    StoreUnavailable(#[source] RepositoryError),
}

impl From<RepositoryError> for ContestError {
    fn from(err: RepositoryError) -> Self {
        ContestError::StoreUnavailable(err)
    }
}

/// Result type for contest operations.
pub type Result<T> = std::result::Result<T, ContestError>;
