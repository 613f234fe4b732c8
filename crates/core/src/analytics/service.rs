//! Analytics calculations.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Days, NaiveDate, NaiveTime, Timelike, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info};

use beehive_shared::types::UserId;

use super::error::AnalyticsError;
use super::range::{current_range, previous_range, DateRange, TimeFilter};
use super::types::{AnalyticsStatistics, CategoryBreakdown, ChartDataPoint};
use crate::movement::{Movement, MovementCategory, MovementStatus, MovementType};
use crate::store::MovementStore;

/// Fixed 6-hour bucket labels for the day view.
const DAY_BUCKET_LABELS: [&str; 5] = ["00h", "06h", "12h", "18h", "24h"];

/// How many categories the breakdown keeps.
const BREAKDOWN_LIMIT: usize = 6;

/// Read-only analytics over the movement history.
pub struct AnalyticsService<S> {
    store: Arc<S>,
}

impl<S: MovementStore> AnalyticsService<S> {
    /// Creates the service over a movement store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Analytics for the period containing today.
    ///
    /// # Errors
    ///
    /// Propagates record store failures.
    pub fn calculate_analytics(
        &self,
        user_id: UserId,
        filter: TimeFilter,
    ) -> Result<AnalyticsStatistics, AnalyticsError> {
        self.calculate_analytics_at(user_id, filter, Utc::now().date_naive())
    }

    /// Analytics for the period containing the given reference date.
    ///
    /// # Errors
    ///
    /// Propagates record store failures.
    pub fn calculate_analytics_at(
        &self,
        user_id: UserId,
        filter: TimeFilter,
        today: NaiveDate,
    ) -> Result<AnalyticsStatistics, AnalyticsError> {
        info!(%user_id, ?filter, "calculating analytics");

        let current = current_range(today, filter);
        let previous = previous_range(today, filter);

        let current_movements =
            relevant(self
                .store
                .movements_for_user_in_range(user_id, current.start, current.end)?);
        let previous_movements =
            relevant(self
                .store
                .movements_for_user_in_range(user_id, previous.start, previous.end)?);

        let total_income = income_sum(&current_movements);
        let total_expenses = expense_sum(&current_movements);
        let net_balance = total_income - total_expenses;

        let previous_income = income_sum(&previous_movements);
        let previous_expenses = expense_sum(&previous_movements);

        let income_change = round_change(percentage_change(previous_income, total_income));
        let expense_change = round_change(percentage_change(previous_expenses, total_expenses));

        let chart_data = match filter {
            TimeFilter::Day => day_chart(&current_movements),
            TimeFilter::Week => week_chart(&current_movements, current),
            TimeFilter::Month => month_chart(&current_movements, current),
            TimeFilter::Year => year_chart(&current_movements, current),
        };

        let category_breakdown = category_breakdown(&current_movements);

        debug!(
            %total_income, %total_expenses, %income_change, %expense_change,
            "analytics calculated"
        );

        Ok(AnalyticsStatistics {
            total_income,
            total_expenses,
            net_balance,
            income_change,
            expense_change,
            chart_data,
            category_breakdown,
        })
    }
}

/// Keeps only confirmed movements outside the transfer category.
fn relevant(mut movements: Vec<Movement>) -> Vec<Movement> {
    movements.retain(|m| {
        m.status == MovementStatus::Confirmed && m.category != MovementCategory::Transfer
    });
    movements
}

fn income_sum(movements: &[Movement]) -> Decimal {
    movements
        .iter()
        .filter(|m| m.movement_type == MovementType::Income)
        .map(|m| m.amount)
        .sum()
}

fn expense_sum(movements: &[Movement]) -> Decimal {
    movements
        .iter()
        .filter(|m| m.movement_type == MovementType::Expense)
        .map(|m| m.amount.abs())
        .sum()
}

/// Relative change in percent. A zero baseline reports 100% as soon as any
/// value appears, 0% otherwise.
fn percentage_change(old: Decimal, new: Decimal) -> Decimal {
    if old.is_zero() {
        if new > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    } else {
        (new - old) / old * Decimal::ONE_HUNDRED
    }
}

fn round_change(change: Decimal) -> Decimal {
    change.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Income/expense sums over movements dated within `[start, end]`.
fn sums_between(movements: &[Movement], start: NaiveDate, end: NaiveDate) -> (Decimal, Decimal) {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for movement in movements
        .iter()
        .filter(|m| m.date >= start && m.date <= end)
    {
        match movement.movement_type {
            MovementType::Income => income += movement.amount,
            MovementType::Expense => expense += movement.amount.abs(),
        }
    }
    (income, expense)
}

/// Day view: five fixed 6-hour buckets.
fn day_chart(movements: &[Movement]) -> Vec<ChartDataPoint> {
    DAY_BUCKET_LABELS
        .iter()
        .enumerate()
        .map(|(bucket, label)| {
            let hour_start = u32::try_from(bucket).unwrap_or(0) * 6;
            let hour_end = hour_start + 6;
            let mut income = Decimal::ZERO;
            let mut expense = Decimal::ZERO;
            for movement in movements {
                // Movement dates carry no time component, so activity books
                // at midnight and lands in the first bucket.
                let hour = movement.date.and_time(NaiveTime::MIN).hour();
                if hour >= hour_start && hour < hour_end {
                    match movement.movement_type {
                        MovementType::Income => income += movement.amount,
                        MovementType::Expense => expense += movement.amount.abs(),
                    }
                }
            }
            ChartDataPoint {
                label: (*label).to_string(),
                income,
                expense,
            }
        })
        .collect()
}

/// Week view: one point per calendar day, labeled by weekday.
fn week_chart(movements: &[Movement], range: DateRange) -> Vec<ChartDataPoint> {
    range
        .iter_days()
        .map(|date| {
            let (income, expense) = sums_between(movements, date, date);
            ChartDataPoint {
                label: date.format("%a").to_string(),
                income,
                expense,
            }
        })
        .collect()
}

/// Month view: successive 7-day buckets labeled W1, W2, ... with the final
/// bucket clipped to the range end.
fn month_chart(movements: &[Movement], range: DateRange) -> Vec<ChartDataPoint> {
    let mut chart = Vec::new();
    let mut bucket_start = range.start;
    let mut week_number = 1;

    while bucket_start <= range.end {
        let bucket_end = (bucket_start + Days::new(6)).min(range.end);
        let (income, expense) = sums_between(movements, bucket_start, bucket_end);
        chart.push(ChartDataPoint {
            label: format!("W{week_number}"),
            income,
            expense,
        });
        bucket_start = bucket_start + Days::new(7);
        week_number += 1;
    }

    chart
}

/// Year view: one point per calendar month, labeled by month name, clipped
/// to the range end.
fn year_chart(movements: &[Movement], range: DateRange) -> Vec<ChartDataPoint> {
    let mut chart = Vec::new();
    let mut month_start = range.start;

    while month_start <= range.end {
        let month_end = super::range::month_end(month_start).min(range.end);
        let (income, expense) = sums_between(movements, month_start, month_end);
        chart.push(ChartDataPoint {
            label: month_start.format("%b").to_string(),
            income,
            expense,
        });
        // First day of the following month.
        month_start = super::range::month_end(month_start) + Days::new(1);
    }

    chart
}

/// Groups current-period expenses by category, keeping the largest shares.
fn category_breakdown(movements: &[Movement]) -> Vec<CategoryBreakdown> {
    let expenses: Vec<&Movement> = movements
        .iter()
        .filter(|m| m.movement_type == MovementType::Expense)
        .collect();

    let total: Decimal = expenses.iter().map(|m| m.amount.abs()).sum();
    if total.is_zero() {
        return Vec::new();
    }

    let mut totals: HashMap<MovementCategory, Decimal> = HashMap::new();
    for movement in &expenses {
        *totals.entry(movement.category).or_default() += movement.amount.abs();
    }

    let mut breakdown: Vec<CategoryBreakdown> = totals
        .into_iter()
        .map(|(category, amount)| CategoryBreakdown {
            name: category.display_name(),
            category: category.as_str().to_string(),
            amount,
            percentage: (amount / total * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i32()
                .unwrap_or(0),
        })
        .collect();

    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    breakdown.truncate(BREAKDOWN_LIMIT);
    breakdown
}
