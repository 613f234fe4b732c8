//! Landing-page statistics.
//!
//! Aggregates the stored balances, the current month's confirmed activity,
//! the 29-day balance trend, and the upcoming planned payments.

pub mod error;
pub mod service;
pub mod types;

pub use error::StatisticsError;
pub use service::StatisticsService;
pub use types::{BalanceTrendPoint, LandingStatistics, UpcomingPayment};
