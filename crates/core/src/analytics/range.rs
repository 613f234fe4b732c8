//! Period range computation for the analytics filters.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Reporting granularity selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    /// Today only.
    Day,
    /// The ISO week (Monday through Sunday) containing today.
    Week,
    /// The current calendar month.
    Month,
    /// The current calendar year.
    Year,
}

impl std::str::FromStr for TimeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(format!("Unknown time filter: {other}")),
        }
    }
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates every day of the range in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}

pub(crate) fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub(crate) fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date) + Months::new(1) - Days::new(1)
}

pub(crate) fn year_start(date: NaiveDate) -> NaiveDate {
    month_start(date) - Months::new(date.month0())
}

pub(crate) fn year_end(date: NaiveDate) -> NaiveDate {
    year_start(date) + Months::new(12) - Days::new(1)
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// The period containing `today` for the given filter.
#[must_use]
pub fn current_range(today: NaiveDate, filter: TimeFilter) -> DateRange {
    match filter {
        TimeFilter::Day => DateRange {
            start: today,
            end: today,
        },
        TimeFilter::Week => {
            let start = week_start(today);
            DateRange {
                start,
                end: start + Days::new(6),
            }
        }
        TimeFilter::Month => DateRange {
            start: month_start(today),
            end: month_end(today),
        },
        TimeFilter::Year => DateRange {
            start: year_start(today),
            end: year_end(today),
        },
    }
}

/// The immediately preceding equivalent period.
#[must_use]
pub fn previous_range(today: NaiveDate, filter: TimeFilter) -> DateRange {
    match filter {
        TimeFilter::Day => {
            let day = today - Days::new(1);
            DateRange {
                start: day,
                end: day,
            }
        }
        TimeFilter::Week => {
            let start = week_start(today - Days::new(7));
            DateRange {
                start,
                end: start + Days::new(6),
            }
        }
        TimeFilter::Month => {
            let in_previous = month_start(today) - Days::new(1);
            DateRange {
                start: month_start(in_previous),
                end: month_end(in_previous),
            }
        }
        TimeFilter::Year => {
            let in_previous = year_start(today) - Days::new(1);
            DateRange {
                start: year_start(in_previous),
                end: year_end(in_previous),
            }
        }
    }
}
