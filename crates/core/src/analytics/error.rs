//! Analytics error types.

use thiserror::Error;

use beehive_shared::AppError;

use crate::store::StoreError;

/// Errors raised by the analytics engine.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::Store(inner) => inner.into(),
        }
    }
}
