use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::numeric;

/// Direction of a monetary movement relative to the tracked account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlowChannel {
    Inflow,
    Outflow,
}

/// A single dated monetary movement, read from the external ledger store.
///
/// Records are immutable once ingested; the engine only reads a snapshot of
/// them and never writes back. `amount` is a magnitude; the sign lives in
/// `channel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonetaryRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub amount: f64,
    pub channel: FlowChannel,
    pub category: String,
}

impl MonetaryRecord {
    pub fn new(
        timestamp: DateTime<Utc>,
        amount: f64,
        channel: FlowChannel,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            amount,
            channel,
            category: category.into(),
        }
    }

    /// Guarded magnitude of the movement.
    pub fn magnitude(&self) -> f64 {
        numeric::safe_f64(self.amount)
    }

    /// Amount with outflows negated, for net-flow arithmetic.
    pub fn signed_amount(&self) -> f64 {
        match self.channel {
            FlowChannel::Inflow => self.magnitude(),
            FlowChannel::Outflow => -self.magnitude(),
        }
    }
}
