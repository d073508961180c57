use serde::{Deserialize, Serialize};

use crate::analytics::cashflow::CashFlowSummary;
use crate::analytics::health::HealthScore;
use crate::config::ForecastConfidence;
use crate::domain::BudgetSnapshot;
use crate::numeric;

/// One projected future period.
///
/// `confidence_pct` is a presentation heuristic that decays linearly with
/// distance and floors out. It is not a statistical confidence interval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub period: u32,
    pub projected_value: f64,
    pub confidence_pct: f64,
}

/// Projects future periods from the current burn or flow rate.
pub struct ForecastEngine;

impl ForecastEngine {
    /// Projects cumulative spending forward at the current burn rate.
    ///
    /// Values cap at the budget total: this model does not project overruns,
    /// which the risk engine flags separately.
    pub fn project_spending(
        health: &HealthScore,
        snapshot: &BudgetSnapshot,
        periods: u32,
        period_length_days: u32,
        confidence: &ForecastConfidence,
    ) -> Vec<ForecastPoint> {
        let spent = numeric::safe_f64(snapshot.spent_amount);
        let total = numeric::safe_f64(snapshot.total_amount);
        let rate = numeric::safe_f64(health.burn_rate);

        (0..periods)
            .map(|index| {
                let raw = spent + rate * f64::from(period_length_days) * f64::from(index + 1);
                let projected_value = if total > 0.0 { raw.min(total) } else { raw };
                ForecastPoint {
                    period: index + 1,
                    projected_value: numeric::safe_f64(projected_value),
                    confidence_pct: Self::confidence(index, confidence),
                }
            })
            .collect()
    }

    /// Projects the net cash position from a daily flow rate. Unlike budget
    /// spending there is no ceiling to cap against.
    pub fn project_net_flow(
        flow: &CashFlowSummary,
        daily_rate: f64,
        periods: u32,
        period_length_days: u32,
        confidence: &ForecastConfidence,
    ) -> Vec<ForecastPoint> {
        let base = numeric::safe_f64(flow.net_flow);
        let rate = numeric::safe_f64(daily_rate);

        (0..periods)
            .map(|index| ForecastPoint {
                period: index + 1,
                projected_value: numeric::safe_f64(
                    base + rate * f64::from(period_length_days) * f64::from(index + 1),
                ),
                confidence_pct: Self::confidence(index, confidence),
            })
            .collect()
    }

    fn confidence(period_index: u32, config: &ForecastConfidence) -> f64 {
        numeric::clamp(
            config.start_pct - config.step_pct * f64::from(period_index),
            config.floor_pct,
            100.0,
        )
    }
}
