use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::{AnalyticsError, Result};
use crate::numeric;

/// Point-in-time snapshot of a budget's declared totals.
///
/// Monetary fields are already coerced to finite numbers. Dates may be
/// absent when the upstream record never carried them; the health scorer
/// degrades its timeline outputs to zeros and an unknown completion date in
/// that case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetSnapshot {
    pub total_amount: f64,
    pub spent_amount: f64,
    pub committed_amount: f64,
    pub pending_amount: f64,
    pub funding_allocated: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl BudgetSnapshot {
    /// Builds a snapshot from an untrusted API payload.
    ///
    /// Field-level malformation (nulls, stringified numbers, junk dates) is
    /// absorbed through the numeric guards; only a payload that is not an
    /// object at all is rejected.
    pub fn from_value(payload: &Value) -> Result<Self> {
        let object = payload.as_object().ok_or_else(|| {
            warn!("rejected budget snapshot payload: not a JSON object");
            AnalyticsError::InvalidShape("budget snapshot must be a JSON object".into())
        })?;
        let amount = |name: &str| numeric::safe_num(object.get(name).unwrap_or(&Value::Null));
        Ok(Self {
            total_amount: amount("totalAmount"),
            spent_amount: amount("spentAmount"),
            committed_amount: amount("committedAmount"),
            pending_amount: amount("pendingAmount"),
            funding_allocated: amount("fundingAllocated"),
            start_date: parse_date(object.get("startDate")),
            end_date: parse_date(object.get("endDate")),
        })
    }

    /// Amount left to spend; negative once the budget is overrun.
    pub fn remaining_amount(&self) -> f64 {
        numeric::safe_f64(self.total_amount) - numeric::safe_f64(self.spent_amount)
    }
}

fn parse_date(value: Option<&Value>) -> Option<NaiveDate> {
    let text = value?.as_str()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|instant| instant.date_naive())
        })
}
