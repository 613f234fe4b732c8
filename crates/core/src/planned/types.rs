//! Planned transaction domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use beehive_shared::types::{AccountId, PlannedId};

use crate::movement::types::validate_positive_amount;
use crate::movement::{MovementCategory, MovementStatus, MovementType};

/// Recurrence rule of a planned transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recurrence {
    /// Fires once on the next-execution date.
    Once,
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// Every year.
    Yearly,
}

/// A templated future transaction that has not yet affected any balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planned {
    /// Unique identifier.
    pub id: PlannedId,
    /// The account this entry is scheduled against.
    pub account_id: AccountId,
    /// Category tag, if assigned.
    pub category: Option<MovementCategory>,
    /// Income or expense.
    pub movement_type: MovementType,
    /// Positive amount.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Recurrence rule.
    pub recurrence: Recurrence,
    /// Raw schedule expression, carried opaquely.
    pub cron: Option<String>,
    /// Next date this entry is expected to execute.
    pub next_execution: NaiveDate,
    /// Optional end of the recurrence.
    pub end_date: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: MovementStatus,
}

impl Planned {
    /// Signed balance effect: positive for income, negative for expense.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.movement_type {
            MovementType::Income => self.amount,
            MovementType::Expense => -self.amount,
        }
    }
}

/// Payload for creating a planned transaction.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlannedInput {
    /// Target account.
    pub account_id: AccountId,
    /// Category tag, if assigned.
    pub category: Option<MovementCategory>,
    /// Income or expense.
    pub movement_type: MovementType,
    /// Positive amount.
    #[validate(custom(function = validate_positive_amount))]
    pub amount: Decimal,
    /// Free-text description.
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    /// Recurrence rule.
    pub recurrence: Recurrence,
    /// Raw schedule expression.
    pub cron: Option<String>,
    /// First expected execution date.
    pub next_execution: NaiveDate,
    /// Optional end of the recurrence.
    pub end_date: Option<NaiveDate>,
    /// Lifecycle status at creation.
    pub status: MovementStatus,
}

/// Payload for updating a planned transaction.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePlannedInput {
    /// Target account.
    pub account_id: AccountId,
    /// Category tag, if assigned.
    pub category: Option<MovementCategory>,
    /// Income or expense.
    pub movement_type: MovementType,
    /// Positive amount.
    #[validate(custom(function = validate_positive_amount))]
    pub amount: Decimal,
    /// Free-text description.
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    /// Recurrence rule.
    pub recurrence: Recurrence,
    /// Raw schedule expression.
    pub cron: Option<String>,
    /// Next expected execution date.
    pub next_execution: NaiveDate,
    /// Optional end of the recurrence.
    pub end_date: Option<NaiveDate>,
    /// New lifecycle status.
    pub status: MovementStatus,
}
