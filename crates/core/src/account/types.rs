//! Account domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use beehive_shared::types::{AccountId, UserId};

/// Kind of bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Everyday current account.
    Current,
    /// Savings account.
    Savings,
    /// Investment account.
    Investments,
    /// Closed account, kept for history.
    Closed,
}

/// A bank account with a materialized balance.
///
/// The balance is authoritative: it is set at creation and afterwards only
/// mutated by the balance engine, never recomputed on read. It reflects every
/// movement that has ever been in `Confirmed` state, applied exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub account_name: String,
    /// IBAN, unique across all accounts.
    pub iban: String,
    /// Materialized current balance.
    pub balance: Decimal,
    /// Kind of account.
    pub account_type: AccountType,
    /// Display ordering priority (lower sorts first).
    pub priority: i64,
}

/// Payload for creating an account.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAccountInput {
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    #[validate(length(min = 2, max = 75))]
    pub account_name: String,
    /// IBAN, fixed length.
    #[validate(length(equal = 25))]
    pub iban: String,
    /// Opening balance.
    pub balance: Decimal,
    /// Kind of account.
    pub account_type: AccountType,
    /// Display ordering priority.
    pub priority: i64,
}

/// Payload for updating an account.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAccountInput {
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    #[validate(length(min = 2, max = 75))]
    pub account_name: String,
    /// IBAN, fixed length.
    #[validate(length(equal = 25))]
    pub iban: String,
    /// Stored balance.
    pub balance: Decimal,
    /// Kind of account.
    pub account_type: AccountType,
}
