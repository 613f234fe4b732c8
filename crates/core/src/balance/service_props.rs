//! Property tests for the balance engine round-trip guarantees.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use beehive_shared::types::{AccountId, UserId};

use super::locks::AccountLocks;
use super::service::BalanceService;
use crate::account::{Account, AccountType};
use crate::movement::MovementType;
use crate::store::memory::InMemoryStore;
use crate::store::AccountStore;

fn service_with_balance(
    balance: Decimal,
) -> (BalanceService<InMemoryStore>, Arc<InMemoryStore>, AccountId) {
    let store = Arc::new(InMemoryStore::new());
    let account = Account {
        id: AccountId::new(),
        user_id: UserId::new(),
        account_name: "Main".to_string(),
        iban: "ES0000000000000000000001X".to_string(),
        balance,
        account_type: AccountType::Current,
        priority: 1,
    };
    let id = account.id;
    store.save_account(account).unwrap();
    let service = BalanceService::new(Arc::clone(&store), Arc::new(AccountLocks::new()));
    (service, store, id)
}

/// Positive amounts in cents, up to 100,000.00.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn movement_type_strategy() -> impl Strategy<Value = MovementType> {
    prop_oneof![Just(MovementType::Income), Just(MovementType::Expense)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reversing an applied effect restores the original balance exactly.
    #[test]
    fn prop_reverse_undoes_apply(
        amount in amount_strategy(),
        extra in 0i64..10_000_000,
        movement_type in movement_type_strategy(),
    ) {
        // Seed enough balance that the apply step always succeeds.
        let initial = amount + Decimal::new(extra, 2);
        let (service, _store, id) = service_with_balance(initial);

        service.apply(id, amount, movement_type).unwrap();
        let restored = service.reverse(id, amount, movement_type).unwrap();

        prop_assert_eq!(restored.balance, initial);
    }

    /// A no-op edit (same amount, same type) leaves the balance unchanged.
    #[test]
    fn prop_noop_update_keeps_balance(
        amount in amount_strategy(),
        extra in 0i64..10_000_000,
        movement_type in movement_type_strategy(),
    ) {
        let initial = amount + Decimal::new(extra, 2);
        let (service, _store, id) = service_with_balance(initial);

        let updated = service
            .update_transaction(id, amount, movement_type, amount, movement_type)
            .unwrap();

        prop_assert_eq!(updated.balance, initial);
    }

    /// A rejected expense never moves the stored balance.
    #[test]
    fn prop_rejected_expense_leaves_balance(
        balance_cents in 0i64..10_000_000,
        excess in 1i64..10_000_000,
    ) {
        let balance = Decimal::new(balance_cents, 2);
        let (service, store, id) = service_with_balance(balance);

        let amount = balance + Decimal::new(excess, 2);
        prop_assert!(service.apply(id, amount, MovementType::Expense).is_err());

        let stored = store.account(id).unwrap().unwrap().balance;
        prop_assert_eq!(stored, balance);
    }
}
