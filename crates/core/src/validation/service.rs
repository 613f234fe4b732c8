//! Account existence and IBAN uniqueness checks.

use std::sync::Arc;

use tracing::{debug, warn};

use beehive_shared::types::AccountId;

use super::error::ValidationError;
use crate::account::Account;
use crate::store::AccountStore;

/// Pure precondition-checking layer in front of the lifecycle services.
pub struct ValidationService<S> {
    store: Arc<S>,
}

impl<S: AccountStore> ValidationService<S> {
    /// Creates the guard over an account store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches the referenced account or fails.
    ///
    /// # Errors
    ///
    /// `AccountNotFound` if no account has this id.
    pub fn account_exists(&self, account_id: AccountId) -> Result<Account, ValidationError> {
        debug!(%account_id, "validating account exists");
        self.store
            .account(account_id)?
            .ok_or(ValidationError::AccountNotFound(account_id))
    }

    /// Checks that no account carries the proposed IBAN yet.
    ///
    /// # Errors
    ///
    /// `DuplicateIban` if the IBAN is already taken.
    pub fn iban_unique(&self, iban: &str) -> Result<(), ValidationError> {
        debug!(iban, "validating IBAN uniqueness");
        if self.store.iban_exists(iban)? {
            warn!(iban, "IBAN already exists");
            return Err(ValidationError::DuplicateIban(iban.to_string()));
        }
        Ok(())
    }

    /// Uniqueness check for account updates: a no-op when the IBAN is
    /// unchanged, otherwise the same check against all other accounts.
    ///
    /// # Errors
    ///
    /// `DuplicateIban` if the changed IBAN is already taken.
    pub fn iban_unique_for_update(
        &self,
        account_id: AccountId,
        new_iban: &str,
        current_iban: &str,
    ) -> Result<(), ValidationError> {
        debug!(%account_id, current_iban, new_iban, "validating IBAN change");
        if new_iban == current_iban {
            return Ok(());
        }
        self.iban_unique(new_iban)
    }
}
