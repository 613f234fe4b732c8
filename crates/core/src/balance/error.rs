//! Balance engine error types.

use rust_decimal::Decimal;
use thiserror::Error;

use beehive_shared::types::AccountId;
use beehive_shared::AppError;

use crate::store::StoreError;

/// Errors that can occur while mutating an account balance.
#[derive(Debug, Error)]
pub enum BalanceError {
    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// The balance cannot cover the requested operation.
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the point the operation was attempted.
        balance: Decimal,
        /// Amount the operation required.
        requested: Decimal,
    },

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<BalanceError> for AppError {
    fn from(err: BalanceError) -> Self {
        match err {
            BalanceError::AccountNotFound(id) => Self::NotFound(format!("account {id}")),
            BalanceError::InsufficientFunds { .. } => Self::InsufficientFunds(err.to_string()),
            BalanceError::Store(inner) => inner.into(),
        }
    }
}
