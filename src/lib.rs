#![doc(test(attr(deny(warnings))))]

//! Budget Analytics offers derived-metrics aggregation, scoring, and
//! forecasting primitives that power budgeting dashboards and reports.
//!
//! The crate is a pure library: it reads snapshots of monetary records and
//! budget totals supplied by the host, and returns time-bucketed aggregates,
//! growth indicators, a weighted health score, ranked risk factors, and
//! multi-period projections. It performs no I/O and keeps no state between
//! calls.

pub mod analytics;
pub mod config;
pub mod domain;
pub mod errors;
pub mod numeric;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Analytics tracing initialized.");
    });
}
