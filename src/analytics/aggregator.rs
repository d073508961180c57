use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{
    AggregateBucket, BucketSeries, Granularity, MonetaryRecord, TimeWindow,
};
use crate::errors::{AnalyticsError, Result};
use crate::numeric;

/// Cuts dated records into fixed, contiguous windows stepping backward from
/// a caller-supplied reference instant.
///
/// Passing the reference explicitly keeps every call deterministic: the same
/// records and the same instant always produce the same buckets, regardless
/// of when the call runs.
pub struct TimeWindowAggregator;

impl TimeWindowAggregator {
    /// Aggregates record magnitudes into exactly `window_count` buckets,
    /// oldest first.
    ///
    /// A record belongs to the window whose half-open `[start, end)` interval
    /// contains its timestamp. Records before the earliest window or at/after
    /// `reference_now` are excluded outright, never reassigned to the
    /// nearest bucket.
    pub fn bucket(
        records: &[MonetaryRecord],
        granularity: Granularity,
        window_count: usize,
        reference_now: DateTime<Utc>,
    ) -> Result<BucketSeries> {
        Self::bucket_with(records, granularity, window_count, reference_now, |record| {
            record.magnitude()
        })
    }

    /// Same windows, but inflows count positive and outflows negative, so a
    /// window sum is that window's net flow.
    pub fn bucket_signed(
        records: &[MonetaryRecord],
        granularity: Granularity,
        window_count: usize,
        reference_now: DateTime<Utc>,
    ) -> Result<BucketSeries> {
        Self::bucket_with(records, granularity, window_count, reference_now, |record| {
            record.signed_amount()
        })
    }

    /// Net flow per day for the trailing `days` days, oldest first.
    pub fn daily_net_flows(
        records: &[MonetaryRecord],
        days: usize,
        reference_now: DateTime<Utc>,
    ) -> Result<Vec<f64>> {
        let series = Self::bucket_signed(records, Granularity::Day, days, reference_now)?;
        Ok(series.sums())
    }

    fn bucket_with(
        records: &[MonetaryRecord],
        granularity: Granularity,
        window_count: usize,
        reference_now: DateTime<Utc>,
        value_of: impl Fn(&MonetaryRecord) -> f64,
    ) -> Result<BucketSeries> {
        if window_count == 0 {
            return Err(AnalyticsError::InvalidShape(
                "window count must be at least one".into(),
            ));
        }

        let windows = build_windows(granularity, window_count, reference_now);
        let mut sums = vec![0.0f64; window_count];
        let mut counts = vec![0usize; window_count];
        let mut matched = 0usize;
        let mut excluded = 0usize;

        for record in records {
            match windows.iter().position(|window| window.contains(record.timestamp)) {
                Some(index) => {
                    sums[index] += value_of(record);
                    counts[index] += 1;
                    matched += 1;
                }
                None => excluded += 1,
            }
        }

        if excluded > 0 {
            debug!("{excluded} record(s) fell outside the {window_count}-window range");
        }

        let buckets = windows
            .into_iter()
            .zip(sums.into_iter().zip(counts))
            .map(|(window, (sum, count))| {
                let average = if count == 0 {
                    0.0
                } else {
                    numeric::safe_f64(sum / count as f64)
                };
                AggregateBucket {
                    window,
                    sum: numeric::safe_f64(sum),
                    count,
                    average,
                }
            })
            .collect();

        Ok(BucketSeries {
            buckets,
            has_data: matched > 0,
        })
    }
}

fn build_windows(
    granularity: Granularity,
    window_count: usize,
    reference_now: DateTime<Utc>,
) -> Vec<TimeWindow> {
    let mut boundaries = Vec::with_capacity(window_count + 1);
    let mut cursor = reference_now;
    boundaries.push(cursor);
    for _ in 0..window_count {
        cursor = granularity.step_back(cursor);
        boundaries.push(cursor);
    }
    boundaries.reverse();

    boundaries
        .windows(2)
        .map(|pair| TimeWindow {
            label: granularity.label_for(pair[0]),
            start: pair[0],
            end: pair[1],
        })
        .collect()
}
