//! Analytics data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Analytics response for one time filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsStatistics {
    /// Total confirmed income in the current period.
    pub total_income: Decimal,
    /// Total confirmed expenses (absolute value) in the current period.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub net_balance: Decimal,
    /// Income change versus the previous period, percent, one decimal.
    pub income_change: Decimal,
    /// Expense change versus the previous period, percent, one decimal.
    pub expense_change: Decimal,
    /// Chart series at the filter's granularity.
    pub chart_data: Vec<ChartDataPoint>,
    /// Top expense categories of the current period.
    pub category_breakdown: Vec<CategoryBreakdown>,
}

/// One bucket of the chart series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Bucket label ("Mon", "W2", "Jun", "06h", ...).
    pub label: String,
    /// Summed income in the bucket.
    pub income: Decimal,
    /// Summed expenses (absolute value) in the bucket.
    pub expense: Decimal,
}

/// One expense category's share of the current period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Human-readable category name ("Food Drinks").
    pub name: String,
    /// Canonical category tag ("FOOD_DRINKS").
    pub category: String,
    /// Summed absolute amount.
    pub amount: Decimal,
    /// Share of total expenses, rounded to the nearest integer percent.
    pub percentage: i32,
}
