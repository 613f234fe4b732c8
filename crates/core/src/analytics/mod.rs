//! Filtered, comparative spending analytics.
//!
//! Derives current-vs-previous period totals, chart series, and the expense
//! category breakdown for a user over a selectable time window.

pub mod error;
pub mod range;
pub mod service;
pub mod types;

pub use error::AnalyticsError;
pub use range::{DateRange, TimeFilter};
pub use service::AnalyticsService;
pub use types::{AnalyticsStatistics, CategoryBreakdown, ChartDataPoint};
