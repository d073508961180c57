use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analytics::cashflow::CashFlowSummary;
use crate::analytics::health::HealthScore;

/// Severity label attached to an emitted risk factor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskFactor {
    pub name: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MitigationSuggestion {
    pub action: String,
    pub detail: String,
}

/// Rule-evaluation output.
///
/// `factors` is never empty: a sentinel low-risk entry stands in when no
/// rule triggers, so a consumer can tell "confirmed healthy" apart from
/// "no data yet".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    pub factors: Vec<RiskFactor>,
    pub suggestions: Vec<MitigationSuggestion>,
}

const LOW_RISK: &str = "Low Risk";

/// Pure rule evaluator over health and cash-flow outputs. Rules fire
/// independently: every matching rule emits, in table order, with no early
/// exit.
pub struct RiskEngine;

impl RiskEngine {
    pub fn evaluate(health: &HealthScore, cash_flow: Option<&CashFlowSummary>) -> RiskAssessment {
        let mut factors = Vec::new();

        if health.utilization_pct > 90.0 {
            factors.push(RiskFactor {
                name: "Budget Overrun".into(),
                description: format!(
                    "Spending has consumed {:.1}% of the budget",
                    health.utilization_pct
                ),
                severity: Severity::High,
            });
        }
        if health.remaining_amount < 0.0 {
            factors.push(RiskFactor {
                name: "Over Budget".into(),
                description: format!(
                    "Spending exceeds the declared total by {:.2}",
                    health.remaining_amount.abs()
                ),
                severity: Severity::High,
            });
        }
        if health.total_days > 0 && health.remaining_days < 30 {
            factors.push(RiskFactor {
                name: "Timeline Pressure".into(),
                description: format!(
                    "Only {} day(s) remain before the budget end date",
                    health.remaining_days
                ),
                severity: Severity::Medium,
            });
        }
        if health.funding_coverage_pct < 50.0 {
            factors.push(RiskFactor {
                name: "Funding Gap".into(),
                description: format!(
                    "Allocated funding covers only {:.1}% of the budget",
                    health.funding_coverage_pct
                ),
                severity: Severity::Medium,
            });
        }
        if health.total_days > 0
            && health.remaining_days > 0
            && health.burn_rate * health.remaining_days as f64 > health.remaining_amount
        {
            factors.push(RiskFactor {
                name: "Unsustainable Burn".into(),
                description: format!(
                    "A burn rate of {:.2}/day exhausts the remaining amount before the end date",
                    health.burn_rate
                ),
                severity: Severity::Medium,
            });
        }
        if let Some(flow) = cash_flow {
            if flow.has_data && flow.net_flow < 0.0 {
                factors.push(RiskFactor {
                    name: "Negative Cash Flow".into(),
                    description: format!(
                        "Outflows exceed inflows by {:.2}",
                        flow.net_flow.abs()
                    ),
                    severity: Severity::Medium,
                });
            }
        }

        if factors.is_empty() {
            factors.push(RiskFactor {
                name: LOW_RISK.into(),
                description: "No risk rules triggered for this snapshot".into(),
                severity: Severity::Low,
            });
        }

        let suggestions = Self::suggestions_for(&factors);
        RiskAssessment {
            factors,
            suggestions,
        }
    }

    /// Second rule table: one suggested action per triggered factor name,
    /// de-duplicated by action.
    fn suggestions_for(factors: &[RiskFactor]) -> Vec<MitigationSuggestion> {
        let mut suggestions: Vec<MitigationSuggestion> = Vec::new();
        for factor in factors {
            let Some((action, detail)) = Self::mitigation_for(&factor.name) else {
                continue;
            };
            if suggestions.iter().any(|existing| existing.action == action) {
                continue;
            }
            suggestions.push(MitigationSuggestion {
                action: action.into(),
                detail: detail.into(),
            });
        }
        suggestions
    }

    fn mitigation_for(name: &str) -> Option<(&'static str, &'static str)> {
        match name {
            "Budget Overrun" | "Over Budget" => Some((
                "Freeze discretionary spending",
                "Review open commitments and pause non-essential purchases until utilization stabilizes.",
            )),
            "Timeline Pressure" => Some((
                "Re-plan remaining work",
                "Re-sequence the remaining spend against the days left, or request an end-date extension.",
            )),
            "Funding Gap" => Some((
                "Secure additional funding",
                "Escalate the allocation shortfall to the funding sources before further spending.",
            )),
            "Unsustainable Burn" => Some((
                "Reduce burn rate",
                "Trim the daily spend so the remaining amount lasts through the end date.",
            )),
            "Negative Cash Flow" => Some((
                "Rebalance cash flow",
                "Defer planned outflows or accelerate expected inflows to return to net-positive.",
            )),
            _ => None,
        }
    }
}
