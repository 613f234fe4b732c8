//! Movement lifecycle operations.
//!
//! Create, update, and delete keep the account balance in sync through the
//! balance engine: a movement's effect is booked while it is `Confirmed` and
//! reversed the moment it stops being so (status change or deletion).

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};
use validator::Validate;

use beehive_shared::types::{AccountId, MovementId};

use super::error::MovementError;
use super::types::{
    CreateMovementInput, Movement, MovementStatus, MovementType, UpdateMovementInput,
};
use crate::balance::{AccountLocks, BalanceService};
use crate::store::{AccountStore, MovementStore};
use crate::validation::ValidationService;

/// Lifecycle service for movements.
pub struct MovementService<S> {
    store: Arc<S>,
    balance: BalanceService<S>,
    validation: ValidationService<S>,
}

impl<S: AccountStore + MovementStore> MovementService<S> {
    /// Creates the service over a store and a shared account-lock registry.
    ///
    /// The registry must be the same one used by every other service that
    /// mutates balances, or the per-account critical sections fall apart.
    pub fn new(store: Arc<S>, locks: Arc<AccountLocks>) -> Self {
        Self {
            balance: BalanceService::new(Arc::clone(&store), locks),
            validation: ValidationService::new(Arc::clone(&store)),
            store,
        }
    }

    /// Creates a movement; a `Confirmed` one books its balance effect first.
    ///
    /// # Errors
    ///
    /// `InvalidInput`, `Validation` (unknown account), or `Balance`
    /// (insufficient funds) — in all cases nothing is persisted.
    pub fn create(&self, input: CreateMovementInput) -> Result<Movement, MovementError> {
        info!(
            account_id = %input.account_id, amount = %input.amount,
            movement_type = %input.movement_type, "creating movement"
        );
        input.validate()?;
        self.validation.account_exists(input.account_id)?;

        if input.status == MovementStatus::Confirmed {
            self.balance
                .apply(input.account_id, input.amount, input.movement_type)?;
        }

        let movement = Movement {
            id: MovementId::new(),
            account_id: input.account_id,
            category: input.category,
            movement_type: input.movement_type,
            amount: input.amount,
            description: input.description,
            date: input.date,
            status: input.status,
        };
        let saved = self.store.save_movement(movement)?;
        info!(movement_id = %saved.id, "movement created");
        Ok(saved)
    }

    /// Fetches a movement by id.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is unknown.
    pub fn get(&self, id: MovementId) -> Result<Movement, MovementError> {
        self.store.movement(id)?.ok_or(MovementError::NotFound(id))
    }

    /// All movements of one account.
    pub fn list_by_account(&self, account_id: AccountId) -> Result<Vec<Movement>, MovementError> {
        Ok(self.store.movements_by_account(account_id)?)
    }

    /// Movements of one account filtered by type.
    pub fn list_by_account_and_type(
        &self,
        account_id: AccountId,
        movement_type: MovementType,
    ) -> Result<Vec<Movement>, MovementError> {
        let mut movements = self.store.movements_by_account(account_id)?;
        movements.retain(|m| m.movement_type == movement_type);
        Ok(movements)
    }

    /// Movements of one account filtered by status.
    pub fn list_by_account_and_status(
        &self,
        account_id: AccountId,
        status: MovementStatus,
    ) -> Result<Vec<Movement>, MovementError> {
        let mut movements = self.store.movements_by_account(account_id)?;
        movements.retain(|m| m.status == status);
        Ok(movements)
    }

    /// Movements of one account dated within `[start, end]`.
    pub fn list_by_account_in_range(
        &self,
        account_id: AccountId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Movement>, MovementError> {
        Ok(self
            .store
            .movements_by_account_in_range(account_id, start, end)?)
    }

    /// Updates a movement with rollback-and-reapply balance semantics.
    ///
    /// The balance work is keyed on the old and new `Confirmed` status:
    /// confirmed-to-confirmed edits run as a single reverse-then-apply
    /// against the (possibly changed) target account; entering or leaving
    /// `Confirmed` books or reverses one side only.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown movement, `Validation` for an unknown
    /// target account, `Balance` when a rollback or reapplication cannot be
    /// covered — the stored balance is left untouched in that case.
    pub fn update(
        &self,
        id: MovementId,
        input: UpdateMovementInput,
    ) -> Result<Movement, MovementError> {
        info!(movement_id = %id, amount = %input.amount, "updating movement");
        input.validate()?;
        let movement = self.get(id)?;
        self.validation.account_exists(input.account_id)?;

        let was_booked = movement.status == MovementStatus::Confirmed;
        let will_book = input.status == MovementStatus::Confirmed;
        match (was_booked, will_book) {
            (true, true) => {
                self.balance.update_transaction(
                    input.account_id,
                    movement.amount,
                    movement.movement_type,
                    input.amount,
                    input.movement_type,
                )?;
            }
            (true, false) => {
                self.balance
                    .reverse(input.account_id, movement.amount, movement.movement_type)?;
            }
            (false, true) => {
                self.balance
                    .apply(input.account_id, input.amount, input.movement_type)?;
            }
            (false, false) => {
                debug!(movement_id = %id, "no balance change needed");
            }
        }

        let updated = Movement {
            id: movement.id,
            account_id: input.account_id,
            category: input.category,
            movement_type: input.movement_type,
            amount: input.amount,
            description: input.description,
            date: input.date,
            status: input.status,
        };
        Ok(self.store.save_movement(updated)?)
    }

    /// Deletes a movement, reversing its balance effect first when it is
    /// `Confirmed`. The record only disappears once the reversal succeeded.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown movement, `Balance` when an income reversal
    /// cannot be covered.
    pub fn delete(&self, id: MovementId) -> Result<(), MovementError> {
        info!(movement_id = %id, "deleting movement");
        let movement = self.get(id)?;

        if movement.status == MovementStatus::Confirmed {
            self.balance
                .reverse(movement.account_id, movement.amount, movement.movement_type)?;
        }

        self.store.delete_movement(movement.id)?;
        info!(movement_id = %id, "movement deleted");
        Ok(())
    }
}
