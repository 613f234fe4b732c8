//! Validation guard error types.

use thiserror::Error;

use beehive_shared::types::AccountId;
use beehive_shared::AppError;

use crate::store::StoreError;

/// Errors raised by the precondition checks.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Referenced account does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Another account already carries this IBAN.
    #[error("IBAN already exists: {0}")]
    DuplicateIban(String),

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::AccountNotFound(id) => Self::NotFound(format!("account {id}")),
            ValidationError::DuplicateIban(iban) => {
                Self::Conflict(format!("IBAN already exists: {iban}"))
            }
            ValidationError::Store(inner) => inner.into(),
        }
    }
}
