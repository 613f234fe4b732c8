//! Planned transaction error types.

use thiserror::Error;

use beehive_shared::types::PlannedId;
use beehive_shared::AppError;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Errors raised by the planned-transaction lifecycle service.
#[derive(Debug, Error)]
pub enum PlannedError {
    /// Planned entry not found.
    #[error("Planned transaction not found: {0}")]
    NotFound(PlannedId),

    /// Malformed payload.
    #[error("Invalid planned payload: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),

    /// Precondition failure (account existence).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<PlannedError> for AppError {
    fn from(err: PlannedError) -> Self {
        match err {
            PlannedError::NotFound(id) => Self::NotFound(format!("planned {id}")),
            PlannedError::InvalidInput(errors) => Self::Validation(errors.to_string()),
            PlannedError::Validation(inner) => inner.into(),
            PlannedError::Store(inner) => inner.into(),
        }
    }
}
