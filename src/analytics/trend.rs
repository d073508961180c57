use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::BucketSeries;
use crate::numeric;

/// Two adjacent equal-length slices of a bucket series, compared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowComparison {
    pub recent_avg: f64,
    pub prior_avg: f64,
    pub growth_pct: f64,
    /// True when the series held fewer than two full windows and the gap was
    /// treated as zero-valued entries.
    pub partial_window: bool,
}

/// Direction label derived from a window comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    Rising,
    Flat,
    Falling,
}

impl fmt::Display for Momentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Momentum::Rising => "rising",
            Momentum::Flat => "flat",
            Momentum::Falling => "falling",
        };
        f.write_str(label)
    }
}

pub struct TrendCalculator;

impl TrendCalculator {
    /// Percentage change from `previous` to `current`.
    ///
    /// The denominator uses `previous.abs()` so a negative prior period keeps
    /// the sign of the change honest instead of flipping it. A zero prior
    /// period yields `0`.
    pub fn growth_rate(current: f64, previous: f64) -> f64 {
        let previous = numeric::safe_f64(previous);
        if previous == 0.0 {
            return 0.0;
        }
        let current = numeric::safe_f64(current);
        numeric::safe_f64((current - previous) / previous.abs() * 100.0)
    }

    /// Compares the most recent `window_size` buckets against the
    /// `window_size` immediately preceding them.
    ///
    /// When the series is shorter than two full windows the missing entries
    /// count as zero-valued; `partial_window` tells the caller the averages
    /// were diluted rather than computed over full history.
    pub fn compare_windows(series: &BucketSeries, window_size: usize) -> WindowComparison {
        if window_size == 0 {
            return WindowComparison {
                recent_avg: 0.0,
                prior_avg: 0.0,
                growth_pct: 0.0,
                partial_window: true,
            };
        }

        let sums = series.sums();
        let len = sums.len();
        let recent_start = len.saturating_sub(window_size);
        let prior_start = len.saturating_sub(window_size * 2);
        let recent = &sums[recent_start..];
        let prior = &sums[prior_start..recent_start];
        let partial_window = recent.len() < window_size || prior.len() < window_size;

        // zero-padding: divide by the requested size, not the slice length
        let recent_avg = numeric::safe_f64(recent.iter().sum::<f64>() / window_size as f64);
        let prior_avg = numeric::safe_f64(prior.iter().sum::<f64>() / window_size as f64);
        let growth_pct = Self::growth_rate(recent_avg, prior_avg);

        WindowComparison {
            recent_avg,
            prior_avg,
            growth_pct,
            partial_window,
        }
    }

    /// Direction of the most recent window pair.
    pub fn momentum(series: &BucketSeries, window_size: usize) -> Momentum {
        let comparison = Self::compare_windows(series, window_size);
        if comparison.growth_pct > 0.0 {
            Momentum::Rising
        } else if comparison.growth_pct < 0.0 {
            Momentum::Falling
        } else {
            Momentum::Flat
        }
    }
}
