//! Statistics data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use beehive_shared::types::PlannedId;

use crate::movement::MovementType;

/// Landing-page statistics for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingStatistics {
    /// Sum of all stored account balances.
    pub balance: Decimal,
    /// Confirmed income in the current calendar month.
    pub income: Decimal,
    /// Confirmed expenses in the current calendar month.
    pub expenses: Decimal,
    /// Signed anticipated effect of planned entries and future movements
    /// through the end of the month.
    pub expected_impact: Decimal,
    /// Number of accounts the user holds.
    pub account_count: usize,
    /// Day-indexed balance trend around today.
    pub balance_trend: Vec<BalanceTrendPoint>,
    /// Next planned payments.
    pub upcoming_payments: Vec<UpcomingPayment>,
}

impl LandingStatistics {
    /// The all-zero result reported for a user without accounts.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            balance: Decimal::ZERO,
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
            expected_impact: Decimal::ZERO,
            account_count: 0,
            balance_trend: Vec::new(),
            upcoming_payments: Vec::new(),
        }
    }
}

/// One day of the balance trend.
///
/// Past days carry a reconstructed `actual` value; today and future days
/// carry a `projected` value. Never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceTrendPoint {
    /// Short display label, e.g. "Jun 5".
    pub label: String,
    /// The day this point describes.
    pub date: NaiveDate,
    /// Reconstructed balance; present only for past days.
    pub actual: Option<Decimal>,
    /// Projected balance; present for today and future days.
    pub projected: Option<Decimal>,
    /// Whether this point is today.
    pub is_today: bool,
    /// Whether this point lies after today.
    pub is_future: bool,
}

/// One upcoming planned payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingPayment {
    /// The planned entry behind this payment.
    pub id: PlannedId,
    /// Free-text description.
    pub description: String,
    /// Positive amount.
    pub amount: Decimal,
    /// Income or expense.
    pub movement_type: MovementType,
    /// Expected execution date.
    pub date: NaiveDate,
    /// Category tag, "OTHER" when the entry has none.
    pub category: String,
}
