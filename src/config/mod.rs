//! Caller-supplied policy knobs for the analytics engine.
//!
//! Every threshold and weight here is denomination- or organization-policy
//! dependent. The defaults preserve the dashboard's historical tuning and
//! are a starting point for product review, not ground truth.

use serde::{Deserialize, Serialize};

/// Top-level engine configuration. Partial JSON configs deserialize with the
/// remaining fields at their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub volatility_bands: VolatilityBands,
    /// Remaining amount below this value counts as running low, in the
    /// ledger's currency unit.
    #[serde(default = "EngineConfig::default_low_funds_threshold")]
    pub low_funds_threshold: f64,
    #[serde(default)]
    pub efficiency_weights: EfficiencyWeights,
    #[serde(default)]
    pub risk_points: RiskPoints,
    #[serde(default)]
    pub forecast_confidence: ForecastConfidence,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            volatility_bands: VolatilityBands::default(),
            low_funds_threshold: Self::default_low_funds_threshold(),
            efficiency_weights: EfficiencyWeights::default(),
            risk_points: RiskPoints::default(),
            forecast_confidence: ForecastConfidence::default(),
        }
    }
}

impl EngineConfig {
    pub fn default_low_funds_threshold() -> f64 {
        1000.0
    }
}

/// Net-flow volatility tier boundaries, in the ledger's currency unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolatilityBands {
    pub medium_floor: f64,
    pub high_floor: f64,
}

impl Default for VolatilityBands {
    fn default() -> Self {
        Self {
            medium_floor: 1000.0,
            high_floor: 5000.0,
        }
    }
}

/// Blend weights for the efficiency score. Spending discipline carries the
/// largest default weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EfficiencyWeights {
    pub utilization: f64,
    pub funding_coverage: f64,
    pub timeline: f64,
}

impl Default for EfficiencyWeights {
    fn default() -> Self {
        Self {
            utilization: 0.4,
            funding_coverage: 0.3,
            timeline: 0.3,
        }
    }
}

/// Additive contributions to the 0-100 heuristic risk level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskPoints {
    /// Utilization above 90%.
    pub high_utilization: u32,
    /// Remaining amount below the low-funds threshold.
    pub low_funds: u32,
    /// Fewer than 30 days left before the end date.
    pub deadline_near: u32,
    /// Utilization above 100%.
    pub over_budget: u32,
}

impl Default for RiskPoints {
    fn default() -> Self {
        Self {
            high_utilization: 30,
            low_funds: 25,
            deadline_near: 20,
            over_budget: 25,
        }
    }
}

/// Linear confidence decay for forecast points: `start - period * step`,
/// floored. A presentation heuristic, not a statistical interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForecastConfidence {
    pub start_pct: f64,
    pub step_pct: f64,
    pub floor_pct: f64,
}

impl Default for ForecastConfidence {
    fn default() -> Self {
        Self {
            start_pct: 90.0,
            step_pct: 5.0,
            floor_pct: 50.0,
        }
    }
}
