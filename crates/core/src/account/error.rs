//! Account lifecycle error types.

use thiserror::Error;

use beehive_shared::types::AccountId;
use beehive_shared::AppError;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Errors raised by the account lifecycle service.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Account not found.
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    /// Malformed payload.
    #[error("Invalid account payload: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),

    /// Precondition failure (IBAN uniqueness).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(id) => Self::NotFound(format!("account {id}")),
            AccountError::InvalidInput(errors) => Self::Validation(errors.to_string()),
            AccountError::Validation(inner) => inner.into(),
            AccountError::Store(inner) => inner.into(),
        }
    }
}
