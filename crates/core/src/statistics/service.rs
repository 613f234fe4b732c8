//! Landing statistics calculations.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use beehive_shared::config::EngineConfig;
use beehive_shared::types::UserId;

use super::error::StatisticsError;
use super::types::{BalanceTrendPoint, LandingStatistics, UpcomingPayment};
use crate::analytics::range::{month_end, month_start};
use crate::movement::{Movement, MovementStatus, MovementType};
use crate::planned::Planned;
use crate::store::{AccountStore, MovementStore, PlannedStore};

/// Read-only aggregation over balances, movements, and planned entries.
///
/// Never mutates a balance: past values are reconstructed by undoing
/// confirmed movements, future values are projected by replaying them
/// forward together with active planned entries.
pub struct StatisticsService<S> {
    store: Arc<S>,
    config: EngineConfig,
}

impl<S: AccountStore + MovementStore + PlannedStore> StatisticsService<S> {
    /// Creates the service with the default windows (14-day trend half
    /// window, 30-day upcoming horizon capped at 10 entries).
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Creates the service with explicit windows.
    pub fn with_config(store: Arc<S>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Landing statistics as of today.
    ///
    /// # Errors
    ///
    /// Propagates record store failures.
    pub fn landing_statistics(&self, user_id: UserId) -> Result<LandingStatistics, StatisticsError> {
        self.landing_statistics_at(user_id, Utc::now().date_naive())
    }

    /// Landing statistics as of the given reference date.
    ///
    /// # Errors
    ///
    /// Propagates record store failures.
    pub fn landing_statistics_at(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<LandingStatistics, StatisticsError> {
        info!(%user_id, "calculating landing statistics");

        let accounts = self.store.accounts_by_user(user_id)?;
        if accounts.is_empty() {
            warn!(%user_id, "no accounts for user");
            return Ok(LandingStatistics::empty());
        }

        let account_count = accounts.len();
        let balance: Decimal = accounts.iter().map(|a| a.balance).sum();

        let start = month_start(today);
        let end = month_end(today);

        let month_movements = self
            .store
            .movements_for_user_in_range(user_id, start, end)?;
        let income = confirmed_sum(&month_movements, MovementType::Income);
        let expenses = confirmed_sum(&month_movements, MovementType::Expense);

        let expected_impact = self.expected_impact(user_id, today, end)?;
        let balance_trend = self.balance_trend(user_id, today, balance)?;
        let upcoming_payments = self.upcoming_payments(user_id, today)?;

        debug!(%balance, %income, %expenses, "landing statistics calculated");

        Ok(LandingStatistics {
            balance,
            income,
            expenses,
            expected_impact,
            account_count,
            balance_trend,
            upcoming_payments,
        })
    }

    /// Signed anticipated effect through the end of the month: active
    /// planned entries in the month window, plus movements dated strictly
    /// after today.
    fn expected_impact(
        &self,
        user_id: UserId,
        today: NaiveDate,
        window_end: NaiveDate,
    ) -> Result<Decimal, StatisticsError> {
        let planned = self
            .store
            .planned_for_user_in_range(user_id, month_start(today), window_end)?;
        let planned_amount: Decimal = planned
            .iter()
            .filter(|p| p.status.is_active())
            .map(Planned::signed_amount)
            .sum();

        let tomorrow = today + Days::new(1);
        let future_movements = self
            .store
            .movements_for_user_in_range(user_id, tomorrow, window_end)?;
        let movement_amount: Decimal = future_movements
            .iter()
            .filter(|m| m.status.is_active())
            .map(Movement::signed_amount)
            .sum();

        debug!(%planned_amount, %movement_amount, "expected impact components");
        Ok(planned_amount + movement_amount)
    }

    /// The balance trend around today: one point per day, reconstructed for
    /// the past and projected for the future, never both.
    fn balance_trend(
        &self,
        user_id: UserId,
        today: NaiveDate,
        current_balance: Decimal,
    ) -> Result<Vec<BalanceTrendPoint>, StatisticsError> {
        let half_window = Days::new(self.config.trend_half_window_days);
        let start = today - half_window;
        let end = today + half_window;

        let confirmed: Vec<Movement> = self
            .store
            .movements_for_user_in_range(user_id, start, end)?
            .into_iter()
            .filter(|m| m.status == MovementStatus::Confirmed)
            .collect();
        let active_planned: Vec<Planned> = self
            .store
            .planned_for_user_in_range(user_id, start, end)?
            .into_iter()
            .filter(|p| p.status.is_active())
            .collect();

        let trend = start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| {
                let value = balance_for_date(
                    date,
                    today,
                    current_balance,
                    &confirmed,
                    &active_planned,
                );
                BalanceTrendPoint {
                    label: date.format("%b %-d").to_string(),
                    date,
                    actual: (date < today).then_some(value),
                    projected: (date >= today).then_some(value),
                    is_today: date == today,
                    is_future: date > today,
                }
            })
            .collect();

        Ok(trend)
    }

    /// Active planned entries strictly after today within the horizon,
    /// soonest first, capped.
    fn upcoming_payments(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<Vec<UpcomingPayment>, StatisticsError> {
        let horizon = today + Days::new(self.config.upcoming_horizon_days);
        let mut upcoming: Vec<Planned> = self
            .store
            .planned_for_user_in_range(user_id, today, horizon)?
            .into_iter()
            .filter(|p| p.status.is_active() && p.next_execution > today)
            .collect();
        upcoming.sort_by_key(|p| p.next_execution);
        upcoming.truncate(self.config.upcoming_limit);

        debug!(count = upcoming.len(), "upcoming payments");

        Ok(upcoming
            .into_iter()
            .map(|p| UpcomingPayment {
                id: p.id,
                description: p.description,
                amount: p.amount,
                movement_type: p.movement_type,
                date: p.next_execution,
                category: p
                    .category
                    .map_or_else(|| "OTHER".to_string(), |c| c.as_str().to_string()),
            })
            .collect())
    }
}

/// The balance at one day of the trend window.
///
/// Past days undo every confirmed movement dated after the day through
/// today; future days replay confirmed movements and active planned entries
/// dated after today through the day.
fn balance_for_date(
    date: NaiveDate,
    today: NaiveDate,
    current_balance: Decimal,
    movements: &[Movement],
    planned: &[Planned],
) -> Decimal {
    if date < today {
        let undone: Decimal = movements
            .iter()
            .filter(|m| m.date > date && m.date <= today)
            .map(Movement::signed_amount)
            .sum();
        current_balance - undone
    } else if date > today {
        let replayed: Decimal = movements
            .iter()
            .filter(|m| m.date > today && m.date <= date)
            .map(Movement::signed_amount)
            .sum();
        let anticipated: Decimal = planned
            .iter()
            .filter(|p| p.next_execution > today && p.next_execution <= date)
            .map(Planned::signed_amount)
            .sum();
        current_balance + replayed + anticipated
    } else {
        current_balance
    }
}

fn confirmed_sum(movements: &[Movement], movement_type: MovementType) -> Decimal {
    movements
        .iter()
        .filter(|m| m.status == MovementStatus::Confirmed && m.movement_type == movement_type)
        .map(|m| m.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Account, AccountType};
    use crate::movement::MovementCategory;
    use crate::planned::Recurrence;
    use crate::store::memory::InMemoryStore;
    use beehive_shared::types::{AccountId, MovementId, PlannedId};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Fixture {
        service: StatisticsService<InMemoryStore>,
        store: Arc<InMemoryStore>,
        user_id: UserId,
        account_id: AccountId,
    }

    fn fixture(balance: Decimal) -> Fixture {
        let store = Arc::new(InMemoryStore::new());
        let user_id = UserId::new();
        let account = Account {
            id: AccountId::new(),
            user_id,
            account_name: "Main".to_string(),
            iban: "ES0000000000000000000001X".to_string(),
            balance,
            account_type: AccountType::Current,
            priority: 1,
        };
        let account_id = account.id;
        store.save_account(account).unwrap();
        Fixture {
            service: StatisticsService::new(Arc::clone(&store)),
            store,
            user_id,
            account_id,
        }
    }

    impl Fixture {
        fn add_movement(
            &self,
            movement_type: MovementType,
            amount: Decimal,
            day: NaiveDate,
            status: MovementStatus,
        ) {
            self.store
                .save_movement(Movement {
                    id: MovementId::new(),
                    account_id: self.account_id,
                    category: MovementCategory::Other,
                    movement_type,
                    amount,
                    description: "test".to_string(),
                    date: day,
                    status,
                })
                .unwrap();
        }

        fn add_planned(
            &self,
            movement_type: MovementType,
            amount: Decimal,
            next_execution: NaiveDate,
            status: MovementStatus,
            category: Option<MovementCategory>,
        ) -> PlannedId {
            let planned = Planned {
                id: PlannedId::new(),
                account_id: self.account_id,
                category,
                movement_type,
                amount,
                description: "planned".to_string(),
                recurrence: Recurrence::Monthly,
                cron: None,
                next_execution,
                end_date: None,
                status,
            };
            let id = planned.id;
            self.store.save_planned(planned).unwrap();
            id
        }
    }

    #[test]
    fn test_user_without_accounts_gets_empty_result() {
        let store = Arc::new(InMemoryStore::new());
        let service = StatisticsService::new(store);

        let stats = service
            .landing_statistics_at(UserId::new(), date(2026, 6, 15))
            .unwrap();
        assert_eq!(stats.balance, dec!(0));
        assert_eq!(stats.income, dec!(0));
        assert_eq!(stats.expenses, dec!(0));
        assert_eq!(stats.expected_impact, dec!(0));
        assert_eq!(stats.account_count, 0);
        assert!(stats.balance_trend.is_empty());
        assert!(stats.upcoming_payments.is_empty());
    }

    #[test]
    fn test_balance_sums_stored_account_balances() {
        let f = fixture(dec!(1000));
        let second = Account {
            id: AccountId::new(),
            user_id: f.user_id,
            account_name: "Savings".to_string(),
            iban: "ES0000000000000000000002X".to_string(),
            balance: dec!(2500),
            account_type: AccountType::Savings,
            priority: 2,
        };
        f.store.save_account(second).unwrap();

        let stats = f
            .service
            .landing_statistics_at(f.user_id, date(2026, 6, 15))
            .unwrap();
        assert_eq!(stats.balance, dec!(3500));
        assert_eq!(stats.account_count, 2);
    }

    #[test]
    fn test_monthly_income_and_expenses_count_confirmed_only() {
        let f = fixture(dec!(1000));
        let today = date(2026, 6, 15);
        f.add_movement(MovementType::Income, dec!(2000), date(2026, 6, 1), MovementStatus::Confirmed);
        f.add_movement(MovementType::Income, dec!(999), date(2026, 6, 2), MovementStatus::Pending);
        f.add_movement(MovementType::Expense, dec!(300), date(2026, 6, 10), MovementStatus::Confirmed);
        // Outside the month window.
        f.add_movement(MovementType::Expense, dec!(50), date(2026, 5, 30), MovementStatus::Confirmed);

        let stats = f.service.landing_statistics_at(f.user_id, today).unwrap();
        assert_eq!(stats.income, dec!(2000));
        assert_eq!(stats.expenses, dec!(300));
    }

    #[test]
    fn test_expected_impact_combines_planned_and_future_movements() {
        let f = fixture(dec!(1000));
        let today = date(2026, 6, 15);
        // Active planned entries inside the month window.
        f.add_planned(MovementType::Income, dec!(500), date(2026, 6, 20), MovementStatus::Pending, None);
        f.add_planned(MovementType::Expense, dec!(100), date(2026, 6, 25), MovementStatus::Pending, None);
        // Inactive ones are ignored.
        f.add_planned(MovementType::Expense, dec!(9999), date(2026, 6, 22), MovementStatus::Cancelled, None);
        // Movements strictly after today count; today's do not.
        f.add_movement(MovementType::Expense, dec!(200), date(2026, 6, 18), MovementStatus::Confirmed);
        f.add_movement(MovementType::Income, dec!(777), today, MovementStatus::Confirmed);

        let stats = f.service.landing_statistics_at(f.user_id, today).unwrap();
        // 500 - 100 - 200 = 200
        assert_eq!(stats.expected_impact, dec!(200));
    }

    #[test]
    fn test_trend_is_flat_without_transactions() {
        let f = fixture(dec!(1000));
        let today = date(2026, 6, 15);

        let stats = f.service.landing_statistics_at(f.user_id, today).unwrap();
        assert_eq!(stats.balance_trend.len(), 29);

        for point in &stats.balance_trend {
            let value = point.actual.or(point.projected).unwrap();
            assert_eq!(value, dec!(1000));
        }

        let today_point = &stats.balance_trend[14];
        assert!(today_point.is_today);
        assert!(!today_point.is_future);
        assert_eq!(today_point.actual, None);
        assert_eq!(today_point.projected, Some(dec!(1000)));

        let first = &stats.balance_trend[0];
        assert_eq!(first.date, date(2026, 6, 1));
        assert_eq!(first.label, "Jun 1");
        assert_eq!(first.actual, Some(dec!(1000)));
        assert_eq!(first.projected, None);
        assert!(!first.is_today && !first.is_future);

        let last = &stats.balance_trend[28];
        assert!(last.is_future);
        assert_eq!(last.actual, None);
    }

    #[test]
    fn test_trend_reconstructs_past_and_projects_future() {
        let f = fixture(dec!(1000));
        let today = date(2026, 6, 15);
        // A confirmed expense five days ago and a confirmed income five days
        // ahead; a planned income further out.
        f.add_movement(MovementType::Expense, dec!(200), date(2026, 6, 10), MovementStatus::Confirmed);
        f.add_movement(MovementType::Income, dec!(300), date(2026, 6, 20), MovementStatus::Confirmed);
        f.add_planned(MovementType::Income, dec!(50), date(2026, 6, 25), MovementStatus::Pending, None);

        let stats = f.service.landing_statistics_at(f.user_id, today).unwrap();
        let trend = &stats.balance_trend;

        // Before the expense the balance was 200 higher.
        assert_eq!(trend[4].date, date(2026, 6, 5));
        assert_eq!(trend[4].actual, Some(dec!(1200)));

        // Between the expense and today nothing changed.
        assert_eq!(trend[11].date, date(2026, 6, 12));
        assert_eq!(trend[11].actual, Some(dec!(1000)));

        // Today reports the stored balance, projected slot only.
        assert_eq!(trend[14].projected, Some(dec!(1000)));

        // Before the future income arrives the projection stays flat.
        assert_eq!(trend[17].date, date(2026, 6, 18));
        assert_eq!(trend[17].projected, Some(dec!(1000)));

        // After the income lands.
        assert_eq!(trend[20].date, date(2026, 6, 20));
        assert_eq!(trend[20].projected, Some(dec!(1300)));

        // After the planned entry executes too.
        assert_eq!(trend[25].date, date(2026, 6, 26));
        assert_eq!(trend[25].projected, Some(dec!(1350)));
        assert_eq!(trend[28].projected, Some(dec!(1350)));
    }

    #[test]
    fn test_trend_ignores_unconfirmed_movements() {
        let f = fixture(dec!(1000));
        let today = date(2026, 6, 15);
        f.add_movement(MovementType::Expense, dec!(500), date(2026, 6, 10), MovementStatus::Pending);
        f.add_movement(MovementType::Income, dec!(500), date(2026, 6, 20), MovementStatus::Failed);

        let stats = f.service.landing_statistics_at(f.user_id, today).unwrap();
        for point in &stats.balance_trend {
            let value = point.actual.or(point.projected).unwrap();
            assert_eq!(value, dec!(1000));
        }
    }

    #[test]
    fn test_upcoming_payments_sorted_capped_and_strictly_future() {
        let f = fixture(dec!(1000));
        let today = date(2026, 6, 15);

        // Today's entry is excluded (strictly after today).
        f.add_planned(MovementType::Expense, dec!(5), today, MovementStatus::Pending, None);
        // Cancelled and failed entries are excluded.
        f.add_planned(MovementType::Expense, dec!(6), date(2026, 6, 17), MovementStatus::Cancelled, None);
        f.add_planned(MovementType::Expense, dec!(7), date(2026, 6, 18), MovementStatus::Failed, None);
        // Twelve active entries; only ten survive the cap.
        for day in 0..12u64 {
            f.add_planned(
                MovementType::Expense,
                dec!(10),
                date(2026, 6, 16) + Days::new(day),
                MovementStatus::Pending,
                Some(MovementCategory::Rent),
            );
        }

        let stats = f.service.landing_statistics_at(f.user_id, today).unwrap();
        assert_eq!(stats.upcoming_payments.len(), 10);
        assert_eq!(stats.upcoming_payments[0].date, date(2026, 6, 16));
        let dates: Vec<NaiveDate> = stats.upcoming_payments.iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert!(stats.upcoming_payments.iter().all(|p| p.date > today));
        assert!(stats.upcoming_payments.iter().all(|p| p.category == "RENT"));
    }

    #[test]
    fn test_upcoming_payment_defaults_category_to_other() {
        let f = fixture(dec!(1000));
        let today = date(2026, 6, 15);
        f.add_planned(MovementType::Income, dec!(100), date(2026, 6, 20), MovementStatus::Pending, None);

        let stats = f.service.landing_statistics_at(f.user_id, today).unwrap();
        assert_eq!(stats.upcoming_payments.len(), 1);
        assert_eq!(stats.upcoming_payments[0].category, "OTHER");
        assert_eq!(stats.upcoming_payments[0].movement_type, MovementType::Income);
    }
}
