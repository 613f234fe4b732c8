//! Movement lifecycle error types.

use thiserror::Error;

use beehive_shared::types::MovementId;
use beehive_shared::AppError;

use crate::balance::BalanceError;
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Errors raised by the movement lifecycle service.
#[derive(Debug, Error)]
pub enum MovementError {
    /// Movement not found.
    #[error("Movement not found: {0}")]
    NotFound(MovementId),

    /// Malformed payload.
    #[error("Invalid movement payload: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),

    /// Precondition failure (account existence).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Balance engine failure (insufficient funds, unknown account).
    #[error(transparent)]
    Balance(#[from] BalanceError),

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<MovementError> for AppError {
    fn from(err: MovementError) -> Self {
        match err {
            MovementError::NotFound(id) => Self::NotFound(format!("movement {id}")),
            MovementError::InvalidInput(errors) => Self::Validation(errors.to_string()),
            MovementError::Validation(inner) => inner.into(),
            MovementError::Balance(inner) => inner.into(),
            MovementError::Store(inner) => inner.into(),
        }
    }
}
