use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::VolatilityBands;
use crate::domain::{FlowChannel, MonetaryRecord};
use crate::numeric;

const NEGATIVE_DAYS_MEDIUM: usize = 7;
const NEGATIVE_DAYS_HIGH: usize = 15;

/// Inflow/outflow totals for a record snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlowSummary {
    pub inflow: f64,
    pub outflow: f64,
    pub net_flow: f64,
    /// False when the snapshot held no records, so the host can render an
    /// empty state instead of a misleading zero.
    pub has_data: bool,
}

/// Heuristic tier for flow turbulence. A magnitude signal, not a statistical
/// claim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FlowRiskTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for FlowRiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlowRiskTier::Low => "low",
            FlowRiskTier::Medium => "medium",
            FlowRiskTier::High => "high",
        };
        f.write_str(label)
    }
}

/// Classifies monetary records into flow channels and derives velocity and
/// turbulence signals from them.
pub struct CashFlowClassifier;

impl CashFlowClassifier {
    /// Sums records by channel; `net_flow = inflow - outflow`.
    pub fn classify(records: &[MonetaryRecord]) -> CashFlowSummary {
        let mut inflow = 0.0;
        let mut outflow = 0.0;
        for record in records {
            match record.channel {
                FlowChannel::Inflow => inflow += record.magnitude(),
                FlowChannel::Outflow => outflow += record.magnitude(),
            }
        }
        CashFlowSummary {
            inflow,
            outflow,
            net_flow: inflow - outflow,
            has_data: !records.is_empty(),
        }
    }

    /// Records per day over the reporting period.
    pub fn velocity(records: &[MonetaryRecord], period_days: u32) -> f64 {
        if period_days == 0 {
            return 0.0;
        }
        records.len() as f64 / f64::from(period_days)
    }

    /// Population standard deviation of a daily net-flow series. An empty
    /// series yields `0`.
    pub fn volatility(daily_net_flows: &[f64]) -> f64 {
        if daily_net_flows.is_empty() {
            return 0.0;
        }
        let n = daily_net_flows.len() as f64;
        let mean = daily_net_flows
            .iter()
            .map(|flow| numeric::safe_f64(*flow))
            .sum::<f64>()
            / n;
        let variance = daily_net_flows
            .iter()
            .map(|flow| {
                let delta = numeric::safe_f64(*flow) - mean;
                delta * delta
            })
            .sum::<f64>()
            / n;
        numeric::safe_f64(variance.sqrt())
    }

    /// Tiers a volatility magnitude against caller-supplied bands. The bands
    /// are denomination-dependent and carry no built-in currency assumption.
    pub fn risk_tier(volatility: f64, bands: &VolatilityBands) -> FlowRiskTier {
        let volatility = numeric::safe_f64(volatility);
        if volatility >= bands.high_floor {
            FlowRiskTier::High
        } else if volatility >= bands.medium_floor {
            FlowRiskTier::Medium
        } else {
            FlowRiskTier::Low
        }
    }

    pub fn negative_flow_day_count(daily_net_flows: &[f64]) -> usize {
        daily_net_flows
            .iter()
            .filter(|flow| numeric::safe_f64(**flow) < 0.0)
            .count()
    }

    /// More than 15 negative days tiers high, more than 7 medium.
    pub fn risk_level_from_negative_days(count: usize) -> FlowRiskTier {
        if count > NEGATIVE_DAYS_HIGH {
            FlowRiskTier::High
        } else if count > NEGATIVE_DAYS_MEDIUM {
            FlowRiskTier::Medium
        } else {
            FlowRiskTier::Low
        }
    }
}
