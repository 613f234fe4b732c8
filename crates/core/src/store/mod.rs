//! Record store boundary.
//!
//! Persistence is an external collaborator: the core only specifies the
//! query shapes it needs and talks to them through these traits. Every
//! operation is synchronous request/response.

pub mod memory;

use chrono::NaiveDate;
use thiserror::Error;

use beehive_shared::types::{AccountId, MovementId, PlannedId, UserId};
use beehive_shared::AppError;

use crate::account::Account;
use crate::movement::Movement;
use crate::planned::Planned;

/// Errors surfaced by a record store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store failed.
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

/// Account persistence operations.
#[cfg_attr(test, mockall::automock)]
pub trait AccountStore: Send + Sync {
    /// Fetches an account by id.
    fn account(&self, id: AccountId) -> Result<Option<Account>, StoreError>;

    /// Persists an account, inserting or replacing.
    fn save_account(&self, account: Account) -> Result<Account, StoreError>;

    /// Removes an account.
    fn delete_account(&self, id: AccountId) -> Result<(), StoreError>;

    /// All accounts owned by a user, in no particular order.
    fn accounts_by_user(&self, user_id: UserId) -> Result<Vec<Account>, StoreError>;

    /// Whether any account carries the given IBAN.
    fn iban_exists(&self, iban: &str) -> Result<bool, StoreError>;
}

/// Movement persistence operations.
#[cfg_attr(test, mockall::automock)]
pub trait MovementStore: Send + Sync {
    /// Fetches a movement by id.
    fn movement(&self, id: MovementId) -> Result<Option<Movement>, StoreError>;

    /// Persists a movement, inserting or replacing.
    fn save_movement(&self, movement: Movement) -> Result<Movement, StoreError>;

    /// Removes a movement.
    fn delete_movement(&self, id: MovementId) -> Result<(), StoreError>;

    /// All movements of one account.
    fn movements_by_account(&self, account_id: AccountId) -> Result<Vec<Movement>, StoreError>;

    /// Movements of one account dated within `[start, end]`.
    fn movements_by_account_in_range(
        &self,
        account_id: AccountId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Movement>, StoreError>;

    /// Movements across all accounts owned by a user, dated within `[start, end]`.
    fn movements_for_user_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Movement>, StoreError>;
}

/// Planned transaction persistence operations.
#[cfg_attr(test, mockall::automock)]
pub trait PlannedStore: Send + Sync {
    /// Fetches a planned entry by id.
    fn planned(&self, id: PlannedId) -> Result<Option<Planned>, StoreError>;

    /// Persists a planned entry, inserting or replacing.
    fn save_planned(&self, planned: Planned) -> Result<Planned, StoreError>;

    /// Removes a planned entry.
    fn delete_planned(&self, id: PlannedId) -> Result<(), StoreError>;

    /// All planned entries of one account.
    fn planned_by_account(&self, account_id: AccountId) -> Result<Vec<Planned>, StoreError>;

    /// Planned entries across all accounts owned by a user whose next
    /// execution falls within `[start, end]`.
    fn planned_for_user_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Planned>, StoreError>;
}
