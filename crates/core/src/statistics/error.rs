//! Statistics error types.

use thiserror::Error;

use beehive_shared::AppError;

use crate::store::StoreError;

/// Errors raised by the statistics engine.
#[derive(Debug, Error)]
pub enum StatisticsError {
    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<StatisticsError> for AppError {
    fn from(err: StatisticsError) -> Self {
        match err {
            StatisticsError::Store(inner) => inner.into(),
        }
    }
}
