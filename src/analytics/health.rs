use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::domain::BudgetSnapshot;
use crate::numeric;

/// Completion date projected from the current spending pace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectedCompletion {
    /// Not enough signal yet: no elapsed time or no spending recorded.
    Unknown,
    Date(NaiveDate),
}

/// Derived health metrics for one budget snapshot at one instant.
///
/// Percentage fields are clamped to `[0, 100]`; `risk_level` is an additive
/// rule score capped at 100, a heuristic rather than a probability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthScore {
    pub utilization_pct: f64,
    pub funding_coverage_pct: f64,
    pub timeline_progress_pct: f64,
    /// Amount consumed per elapsed day.
    pub burn_rate: f64,
    pub efficiency_pct: f64,
    pub risk_level: u32,
    pub remaining_amount: f64,
    pub total_days: i64,
    pub elapsed_days: i64,
    pub remaining_days: i64,
    pub projected_completion: ProjectedCompletion,
}

pub struct BudgetHealthScorer;

impl BudgetHealthScorer {
    /// Scores a snapshot against the caller's policy configuration.
    ///
    /// Missing dates degrade the timeline metrics to zero and the projected
    /// completion to `Unknown`; missing or malformed amounts have already
    /// been coerced to zero upstream. The call never fails.
    pub fn score(snapshot: &BudgetSnapshot, now: NaiveDate, config: &EngineConfig) -> HealthScore {
        let total = numeric::safe_f64(snapshot.total_amount);
        let spent = numeric::safe_f64(snapshot.spent_amount);
        let allocated = numeric::safe_f64(snapshot.funding_allocated);

        // unclamped ratio feeds the over-budget rules; the published field
        // stays inside [0, 100]
        let raw_utilization = if total == 0.0 {
            0.0
        } else {
            numeric::safe_f64(spent / total * 100.0)
        };
        let utilization_pct = numeric::clamp(raw_utilization, 0.0, 100.0);
        let funding_coverage_pct = numeric::safe_percentage(allocated, total);

        let elapsed_days = snapshot
            .start_date
            .map(|start| (now - start).num_days().max(0))
            .unwrap_or(0);
        let (total_days, remaining_days) = match (snapshot.start_date, snapshot.end_date) {
            (Some(start), Some(end)) => (
                (end - start).num_days().max(1),
                (end - now).num_days().max(0),
            ),
            _ => (0, 0),
        };
        let timeline_progress_pct = if total_days > 0 {
            numeric::safe_percentage(elapsed_days as f64, total_days as f64)
        } else {
            0.0
        };

        let burn_rate = if elapsed_days > 0 {
            numeric::safe_f64(spent / elapsed_days as f64)
        } else {
            0.0
        };

        let projected_completion = match snapshot.start_date {
            Some(start) if raw_utilization > 0.0 && elapsed_days > 0 => {
                let projected_days =
                    (elapsed_days as f64 / raw_utilization * 100.0).round() as i64;
                ProjectedCompletion::Date(start + Duration::days(projected_days))
            }
            _ => ProjectedCompletion::Unknown,
        };

        let weights = &config.efficiency_weights;
        let efficiency_pct = numeric::clamp(
            utilization_pct * weights.utilization
                + funding_coverage_pct.min(100.0) * weights.funding_coverage
                + timeline_progress_pct * weights.timeline,
            0.0,
            100.0,
        );

        let remaining_amount = total - spent;
        let points = &config.risk_points;
        let mut risk_level = 0u32;
        if raw_utilization > 90.0 {
            risk_level += points.high_utilization;
        }
        if remaining_amount < config.low_funds_threshold {
            risk_level += points.low_funds;
        }
        if total_days > 0 && remaining_days < 30 {
            risk_level += points.deadline_near;
        }
        if raw_utilization > 100.0 {
            risk_level += points.over_budget;
        }

        HealthScore {
            utilization_pct,
            funding_coverage_pct,
            timeline_progress_pct,
            burn_rate,
            efficiency_pct,
            risk_level: risk_level.min(100),
            remaining_amount,
            total_days,
            elapsed_days,
            remaining_days,
            projected_completion,
        }
    }
}
