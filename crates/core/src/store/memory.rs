//! In-memory record store.
//!
//! Backs the test suite and embedding callers; real persistence lives
//! behind the same traits in an external crate.

use chrono::NaiveDate;
use dashmap::DashMap;

use beehive_shared::types::{AccountId, MovementId, PlannedId, UserId};

use super::{AccountStore, MovementStore, PlannedStore, StoreError};
use crate::account::Account;
use crate::movement::Movement;
use crate::planned::Planned;

/// Thread-safe in-memory implementation of all three store traits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    accounts: DashMap<AccountId, Account>,
    movements: DashMap<MovementId, Movement>,
    planned: DashMap<PlannedId, Planned>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn user_account_ids(&self, user_id: UserId) -> Vec<AccountId> {
        self.accounts
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| *entry.key())
            .collect()
    }
}

impl AccountStore for InMemoryStore {
    fn account(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.get(&id).map(|entry| entry.value().clone()))
    }

    fn save_account(&self, account: Account) -> Result<Account, StoreError> {
        self.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    fn delete_account(&self, id: AccountId) -> Result<(), StoreError> {
        self.accounts.remove(&id);
        Ok(())
    }

    fn accounts_by_user(&self, user_id: UserId) -> Result<Vec<Account>, StoreError> {
        Ok(self
            .accounts
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn iban_exists(&self, iban: &str) -> Result<bool, StoreError> {
        Ok(self.accounts.iter().any(|entry| entry.value().iban == iban))
    }
}

impl MovementStore for InMemoryStore {
    fn movement(&self, id: MovementId) -> Result<Option<Movement>, StoreError> {
        Ok(self.movements.get(&id).map(|entry| entry.value().clone()))
    }

    fn save_movement(&self, movement: Movement) -> Result<Movement, StoreError> {
        self.movements.insert(movement.id, movement.clone());
        Ok(movement)
    }

    fn delete_movement(&self, id: MovementId) -> Result<(), StoreError> {
        self.movements.remove(&id);
        Ok(())
    }

    fn movements_by_account(&self, account_id: AccountId) -> Result<Vec<Movement>, StoreError> {
        Ok(self
            .movements
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn movements_by_account_in_range(
        &self,
        account_id: AccountId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Movement>, StoreError> {
        Ok(self
            .movements
            .iter()
            .filter(|entry| {
                let m = entry.value();
                m.account_id == account_id && m.date >= start && m.date <= end
            })
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn movements_for_user_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Movement>, StoreError> {
        let account_ids = self.user_account_ids(user_id);
        Ok(self
            .movements
            .iter()
            .filter(|entry| {
                let m = entry.value();
                account_ids.contains(&m.account_id) && m.date >= start && m.date <= end
            })
            .map(|entry| entry.value().clone())
            .collect())
    }
}

impl PlannedStore for InMemoryStore {
    fn planned(&self, id: PlannedId) -> Result<Option<Planned>, StoreError> {
        Ok(self.planned.get(&id).map(|entry| entry.value().clone()))
    }

    fn save_planned(&self, planned: Planned) -> Result<Planned, StoreError> {
        self.planned.insert(planned.id, planned.clone());
        Ok(planned)
    }

    fn delete_planned(&self, id: PlannedId) -> Result<(), StoreError> {
        self.planned.remove(&id);
        Ok(())
    }

    fn planned_by_account(&self, account_id: AccountId) -> Result<Vec<Planned>, StoreError> {
        Ok(self
            .planned
            .iter()
            .filter(|entry| entry.value().account_id == account_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn planned_for_user_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Planned>, StoreError> {
        let account_ids = self.user_account_ids(user_id);
        Ok(self
            .planned
            .iter()
            .filter(|entry| {
                let p = entry.value();
                account_ids.contains(&p.account_id)
                    && p.next_execution >= start
                    && p.next_execution <= end
            })
            .map(|entry| entry.value().clone())
            .collect())
    }
}
