//! Balance mutation operations.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use beehive_shared::types::AccountId;

use super::error::BalanceError;
use super::locks::AccountLocks;
use crate::account::Account;
use crate::movement::MovementType;
use crate::store::AccountStore;

/// Adds a transaction's effect to a balance.
///
/// Expenses are checked against the available balance; income is added
/// unconditionally.
fn apply_effect(
    balance: Decimal,
    amount: Decimal,
    movement_type: MovementType,
) -> Result<Decimal, BalanceError> {
    match movement_type {
        MovementType::Expense => {
            if balance < amount {
                return Err(BalanceError::InsufficientFunds {
                    balance,
                    requested: amount,
                });
            }
            Ok(balance - amount)
        }
        MovementType::Income => Ok(balance + amount),
    }
}

/// Removes a previously applied effect from a balance; the exact inverse of
/// [`apply_effect`].
///
/// Reversing an expense restores funds without a check; reversing income
/// requires the balance to still cover it.
fn reverse_effect(
    balance: Decimal,
    amount: Decimal,
    movement_type: MovementType,
) -> Result<Decimal, BalanceError> {
    match movement_type {
        MovementType::Expense => Ok(balance + amount),
        MovementType::Income => {
            if balance < amount {
                return Err(BalanceError::InsufficientFunds {
                    balance,
                    requested: amount,
                });
            }
            Ok(balance - amount)
        }
    }
}

/// The authoritative mutator of account balances.
///
/// Each operation holds the account's lock across the whole load-compute-save
/// sequence, so concurrent lifecycle events against the same account cannot
/// lose updates.
pub struct BalanceService<S> {
    store: Arc<S>,
    locks: Arc<AccountLocks>,
}

impl<S: AccountStore> BalanceService<S> {
    /// Creates the service over a store and a shared lock registry.
    pub fn new(store: Arc<S>, locks: Arc<AccountLocks>) -> Self {
        Self { store, locks }
    }

    /// Books a confirmed transaction's effect onto the account balance.
    ///
    /// # Errors
    ///
    /// `InsufficientFunds` if an expense exceeds the balance;
    /// `AccountNotFound` if the account does not exist.
    pub fn apply(
        &self,
        account_id: AccountId,
        amount: Decimal,
        movement_type: MovementType,
    ) -> Result<Account, BalanceError> {
        debug!(%account_id, %amount, %movement_type, "applying transaction");
        self.locks.with_lock(account_id, || {
            let mut account = self.load(account_id)?;
            account.balance = apply_effect(account.balance, amount, movement_type)
                .inspect_err(|_| self.warn_insufficient(account_id, &account, amount))?;
            Ok(self.store.save_account(account)?)
        })
    }

    /// Undoes a previously booked effect; the inverse of [`Self::apply`].
    ///
    /// # Errors
    ///
    /// `InsufficientFunds` if an income reversal exceeds the balance;
    /// `AccountNotFound` if the account does not exist.
    pub fn reverse(
        &self,
        account_id: AccountId,
        amount: Decimal,
        movement_type: MovementType,
    ) -> Result<Account, BalanceError> {
        debug!(%account_id, %amount, %movement_type, "reversing transaction");
        self.locks.with_lock(account_id, || {
            let mut account = self.load(account_id)?;
            account.balance = reverse_effect(account.balance, amount, movement_type)
                .inspect_err(|_| self.warn_insufficient(account_id, &account, amount))?;
            Ok(self.store.save_account(account)?)
        })
    }

    /// Rolls back the old effect and books the new one against the same
    /// account: reverse(old) then apply(new), in that order.
    ///
    /// The two steps run sequentially against the in-memory balance, so an
    /// edit can be rejected mid-sequence even when its net delta would be
    /// valid; this matches the booked-history semantics rather than a
    /// combined-delta check. The account is persisted only after both steps
    /// succeed, so a failure never leaves a partial mutation in the store.
    ///
    /// # Errors
    ///
    /// `InsufficientFunds` from either step; `AccountNotFound` if the account
    /// does not exist.
    pub fn update_transaction(
        &self,
        account_id: AccountId,
        old_amount: Decimal,
        old_type: MovementType,
        new_amount: Decimal,
        new_type: MovementType,
    ) -> Result<Account, BalanceError> {
        debug!(
            %account_id, %old_amount, %old_type, %new_amount, %new_type,
            "updating booked transaction"
        );
        self.locks.with_lock(account_id, || {
            let mut account = self.load(account_id)?;
            let rolled_back = reverse_effect(account.balance, old_amount, old_type)
                .inspect_err(|_| self.warn_insufficient(account_id, &account, old_amount))?;
            account.balance = apply_effect(rolled_back, new_amount, new_type).inspect_err(|_| {
                warn!(
                    %account_id, balance = %rolled_back, requested = %new_amount,
                    "insufficient funds re-applying updated transaction"
                );
            })?;
            Ok(self.store.save_account(account)?)
        })
    }

    fn load(&self, account_id: AccountId) -> Result<Account, BalanceError> {
        self.store
            .account(account_id)?
            .ok_or(BalanceError::AccountNotFound(account_id))
    }

    fn warn_insufficient(&self, account_id: AccountId, account: &Account, amount: Decimal) {
        warn!(
            %account_id, balance = %account.balance, requested = %amount,
            "insufficient funds"
        );
    }
}
