//! Planned transaction lifecycle operations.
//!
//! Planned entries never touch a balance; they only feed the projection and
//! upcoming-payment logic of the statistics engine.

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use beehive_shared::types::{AccountId, PlannedId};

use super::error::PlannedError;
use super::types::{CreatePlannedInput, Planned, UpdatePlannedInput};
use crate::movement::{MovementStatus, MovementType};
use crate::store::{AccountStore, PlannedStore};
use crate::validation::ValidationService;

/// Lifecycle service for planned transactions.
pub struct PlannedService<S> {
    store: Arc<S>,
    validation: ValidationService<S>,
}

impl<S: AccountStore + PlannedStore> PlannedService<S> {
    /// Creates the service over a store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            validation: ValidationService::new(Arc::clone(&store)),
            store,
        }
    }

    /// Creates a planned entry after checking the target account exists.
    ///
    /// # Errors
    ///
    /// `InvalidInput` on a malformed payload, `Validation` on an unknown
    /// account.
    pub fn create(&self, input: CreatePlannedInput) -> Result<Planned, PlannedError> {
        info!(
            account_id = %input.account_id, amount = %input.amount,
            next_execution = %input.next_execution, "creating planned transaction"
        );
        input.validate()?;
        self.validation.account_exists(input.account_id)?;

        let planned = Planned {
            id: PlannedId::new(),
            account_id: input.account_id,
            category: input.category,
            movement_type: input.movement_type,
            amount: input.amount,
            description: input.description,
            recurrence: input.recurrence,
            cron: input.cron,
            next_execution: input.next_execution,
            end_date: input.end_date,
            status: input.status,
        };
        Ok(self.store.save_planned(planned)?)
    }

    /// Fetches a planned entry by id.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is unknown.
    pub fn get(&self, id: PlannedId) -> Result<Planned, PlannedError> {
        self.store.planned(id)?.ok_or(PlannedError::NotFound(id))
    }

    /// All planned entries of one account.
    pub fn list_by_account(&self, account_id: AccountId) -> Result<Vec<Planned>, PlannedError> {
        Ok(self.store.planned_by_account(account_id)?)
    }

    /// Planned entries of one account filtered by type.
    pub fn list_by_account_and_type(
        &self,
        account_id: AccountId,
        movement_type: MovementType,
    ) -> Result<Vec<Planned>, PlannedError> {
        let mut planned = self.store.planned_by_account(account_id)?;
        planned.retain(|p| p.movement_type == movement_type);
        Ok(planned)
    }

    /// Planned entries of one account filtered by status.
    pub fn list_by_account_and_status(
        &self,
        account_id: AccountId,
        status: MovementStatus,
    ) -> Result<Vec<Planned>, PlannedError> {
        let mut planned = self.store.planned_by_account(account_id)?;
        planned.retain(|p| p.status == status);
        Ok(planned)
    }

    /// Updates a planned entry; balances stay untouched by design.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown entry, `Validation` for an unknown target
    /// account.
    pub fn update(&self, id: PlannedId, input: UpdatePlannedInput) -> Result<Planned, PlannedError> {
        info!(planned_id = %id, "updating planned transaction");
        input.validate()?;
        let planned = self.get(id)?;
        self.validation.account_exists(input.account_id)?;

        let updated = Planned {
            id: planned.id,
            account_id: input.account_id,
            category: input.category,
            movement_type: input.movement_type,
            amount: input.amount,
            description: input.description,
            recurrence: input.recurrence,
            cron: input.cron,
            next_execution: input.next_execution,
            end_date: input.end_date,
            status: input.status,
        };
        Ok(self.store.save_planned(updated)?)
    }

    /// Deletes a planned entry.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is unknown.
    pub fn delete(&self, id: PlannedId) -> Result<(), PlannedError> {
        debug!(planned_id = %id, "deleting planned transaction");
        let planned = self.get(id)?;
        self.store.delete_planned(planned.id)?;
        info!(planned_id = %id, "planned transaction deleted");
        Ok(())
    }
}
