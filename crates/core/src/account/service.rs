//! Account lifecycle operations.

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use beehive_shared::types::{AccountId, UserId};

use super::error::AccountError;
use super::types::{Account, CreateAccountInput, UpdateAccountInput};
use crate::store::AccountStore;
use crate::validation::ValidationService;

/// Create/update/delete for accounts, with the IBAN uniqueness guard in
/// front. The balance set at creation is afterwards owned by the balance
/// engine.
pub struct AccountService<S> {
    store: Arc<S>,
    validation: ValidationService<S>,
}

impl<S: AccountStore> AccountService<S> {
    /// Creates the service over an account store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            validation: ValidationService::new(Arc::clone(&store)),
            store,
        }
    }

    /// Creates an account after checking IBAN uniqueness.
    ///
    /// # Errors
    ///
    /// `InvalidInput` on a malformed payload, `Validation` on a duplicate
    /// IBAN.
    pub fn create(&self, input: CreateAccountInput) -> Result<Account, AccountError> {
        info!(user_id = %input.user_id, iban = %input.iban, "creating account");
        input.validate()?;
        self.validation.iban_unique(&input.iban)?;

        let account = Account {
            id: AccountId::new(),
            user_id: input.user_id,
            account_name: input.account_name,
            iban: input.iban,
            balance: input.balance,
            account_type: input.account_type,
            priority: input.priority,
        };
        Ok(self.store.save_account(account)?)
    }

    /// Fetches an account by id.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is unknown.
    pub fn get(&self, id: AccountId) -> Result<Account, AccountError> {
        self.store.account(id)?.ok_or(AccountError::NotFound(id))
    }

    /// All accounts of a user, ordered by display priority.
    pub fn list_by_user(&self, user_id: UserId) -> Result<Vec<Account>, AccountError> {
        let mut accounts = self.store.accounts_by_user(user_id)?;
        accounts.sort_by_key(|account| account.priority);
        Ok(accounts)
    }

    /// Updates an account; an IBAN change is checked against all other
    /// accounts.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation` on a duplicate IBAN.
    pub fn update(&self, id: AccountId, input: UpdateAccountInput) -> Result<Account, AccountError> {
        info!(account_id = %id, iban = %input.iban, "updating account");
        input.validate()?;
        let mut account = self.get(id)?;
        self.validation
            .iban_unique_for_update(id, &input.iban, &account.iban)?;

        account.user_id = input.user_id;
        account.account_name = input.account_name;
        account.iban = input.iban;
        account.balance = input.balance;
        account.account_type = input.account_type;
        Ok(self.store.save_account(account)?)
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is unknown.
    pub fn delete(&self, id: AccountId) -> Result<(), AccountError> {
        debug!(account_id = %id, "deleting account");
        let account = self.get(id)?;
        self.store.delete_account(account.id)?;
        info!(account_id = %id, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountType;
    use crate::store::memory::InMemoryStore;
    use rust_decimal_macros::dec;

    fn make_input(iban: &str, priority: i64) -> CreateAccountInput {
        CreateAccountInput {
            user_id: UserId::new(),
            account_name: "Checking".to_string(),
            iban: iban.to_string(),
            balance: dec!(1000),
            account_type: AccountType::Current,
            priority,
        }
    }

    fn service() -> AccountService<InMemoryStore> {
        AccountService::new(Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn test_create_account_sets_balance() {
        let service = service();
        let account = service
            .create(make_input("ES0000000000000000000001X", 1))
            .unwrap();
        assert_eq!(account.balance, dec!(1000));
        assert_eq!(service.get(account.id).unwrap().iban, account.iban);
    }

    #[test]
    fn test_create_duplicate_iban_conflicts() {
        let service = service();
        service
            .create(make_input("ES0000000000000000000001X", 1))
            .unwrap();

        let result = service.create(make_input("ES0000000000000000000001X", 2));
        assert!(matches!(result, Err(AccountError::Validation(_))));
    }

    #[test]
    fn test_create_rejects_bad_iban_length() {
        let service = service();
        let result = service.create(make_input("TOO-SHORT", 1));
        assert!(matches!(result, Err(AccountError::InvalidInput(_))));
    }

    #[test]
    fn test_update_keeping_iban_is_allowed() {
        let service = service();
        let account = service
            .create(make_input("ES0000000000000000000001X", 1))
            .unwrap();

        // Same IBAN on the same account must not trip the uniqueness check.
        let updated = service
            .update(
                account.id,
                UpdateAccountInput {
                    user_id: account.user_id,
                    account_name: "Renamed".to_string(),
                    iban: account.iban.clone(),
                    balance: account.balance,
                    account_type: AccountType::Savings,
                },
            )
            .unwrap();
        assert_eq!(updated.account_name, "Renamed");
        assert_eq!(updated.account_type, AccountType::Savings);
    }

    #[test]
    fn test_update_to_taken_iban_conflicts() {
        let service = service();
        service
            .create(make_input("ES0000000000000000000001X", 1))
            .unwrap();
        let second = service
            .create(make_input("ES0000000000000000000002X", 2))
            .unwrap();

        let result = service.update(
            second.id,
            UpdateAccountInput {
                user_id: second.user_id,
                account_name: second.account_name.clone(),
                iban: "ES0000000000000000000001X".to_string(),
                balance: second.balance,
                account_type: second.account_type,
            },
        );
        assert!(matches!(result, Err(AccountError::Validation(_))));
    }

    #[test]
    fn test_list_by_user_sorted_by_priority() {
        let service = service();
        let user_id = UserId::new();

        for (iban, priority) in [
            ("ES0000000000000000000003X", 3),
            ("ES0000000000000000000001X", 1),
            ("ES0000000000000000000002X", 2),
        ] {
            let mut input = make_input(iban, priority);
            input.user_id = user_id;
            service.create(input).unwrap();
        }

        let accounts = service.list_by_user(user_id).unwrap();
        let priorities: Vec<i64> = accounts.iter().map(|a| a.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_unknown_account() {
        let service = service();
        assert!(matches!(
            service.delete(AccountId::new()),
            Err(AccountError::NotFound(_))
        ));
    }
}
