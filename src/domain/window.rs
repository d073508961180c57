use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fixed step used when cutting the aggregation timeline into windows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    /// Boundary one step earlier than `from`. Month steps follow the
    /// calendar, clamping the day to the target month's length.
    pub fn step_back(&self, from: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Granularity::Day => from - Duration::days(1),
            Granularity::Week => from - Duration::weeks(1),
            Granularity::Month => shift_months(from, -1),
        }
    }

    /// Presentation label for a window starting at `start`.
    pub fn label_for(&self, start: DateTime<Utc>) -> String {
        match self {
            Granularity::Day => start.format("%Y-%m-%d").to_string(),
            Granularity::Week => format!("Wk {}", start.format("%Y-%m-%d")),
            Granularity::Month => start.format("%Y-%m").to_string(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        };
        f.write_str(label)
    }
}

/// Half-open `[start, end)` aggregation interval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeWindow {
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// Per-window aggregate. An empty window keeps sum, count, and average at
/// zero rather than dropping out of the series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateBucket {
    pub window: TimeWindow,
    pub sum: f64,
    pub count: usize,
    pub average: f64,
}

/// Ordered bucket series plus an explicit empty-state marker.
///
/// `has_data` lets the presentation layer tell "all zeros" apart from
/// "nothing matched the requested range".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BucketSeries {
    pub buckets: Vec<AggregateBucket>,
    pub has_data: bool,
}

impl BucketSeries {
    /// Window sums, oldest first. This is the series most chart layers plot.
    pub fn sums(&self) -> Vec<f64> {
        self.buckets.iter().map(|bucket| bucket.sum).collect()
    }

    pub fn total(&self) -> f64 {
        self.buckets.iter().map(|bucket| bucket.sum).sum()
    }

    pub fn record_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }
}

/// Shifts a timestamp by whole calendar months, clamping the day to the
/// target month's length.
pub(crate) fn shift_months(from: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let date = from.date_naive();
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    let shifted = NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date);
    shifted.and_time(from.time()).and_utc()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
