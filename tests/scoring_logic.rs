use budget_analytics::analytics::{
    BudgetHealthScorer, CashFlowClassifier, FlowRiskTier, ForecastEngine, ProjectedCompletion,
    RiskEngine,
};
use budget_analytics::config::{EngineConfig, VolatilityBands};
use budget_analytics::domain::BudgetSnapshot;
use chrono::NaiveDate;

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mid_cycle_snapshot() -> BudgetSnapshot {
    BudgetSnapshot {
        total_amount: 20000.0,
        spent_amount: 8000.0,
        committed_amount: 1000.0,
        pending_amount: 0.0,
        funding_allocated: 20000.0,
        start_date: Some(sample_date(2025, 1, 1)),
        end_date: Some(sample_date(2025, 12, 31)),
    }
}

#[test]
fn healthy_mid_cycle_budget_keeps_risk_low() {
    let config = EngineConfig::default();
    let score =
        BudgetHealthScorer::score(&mid_cycle_snapshot(), sample_date(2025, 6, 1), &config);

    assert!((score.utilization_pct - 40.0).abs() < 1e-9);
    assert!((score.funding_coverage_pct - 100.0).abs() < 1e-9);
    assert_eq!(score.risk_level, 0);
    assert!(matches!(
        score.projected_completion,
        ProjectedCompletion::Date(_)
    ));

    let assessment = RiskEngine::evaluate(&score, None);
    assert_eq!(assessment.factors.len(), 1);
    assert_eq!(assessment.factors[0].name, "Low Risk");
}

#[test]
fn risk_points_are_configurable_per_organization() {
    let mut config = EngineConfig::default();
    config.risk_points.high_utilization = 50;
    config.risk_points.deadline_near = 0;
    config.low_funds_threshold = 100.0;

    let snapshot = BudgetSnapshot {
        total_amount: 1000.0,
        spent_amount: 950.0,
        start_date: Some(sample_date(2025, 1, 1)),
        end_date: Some(sample_date(2025, 1, 31)),
        ..BudgetSnapshot::default()
    };
    let score = BudgetHealthScorer::score(&snapshot, sample_date(2025, 1, 25), &config);
    // 95% utilization (+50) and 50 remaining below the 100 floor (+25);
    // the zeroed deadline rule contributes nothing
    assert_eq!(score.risk_level, 75);
}

#[test]
fn volatility_bands_rescale_to_other_denominations() {
    let flows = [1500.0, -2500.0, 3000.0, -1800.0, 900.0];
    let sigma = CashFlowClassifier::volatility(&flows);
    assert!(sigma > 1000.0 && sigma < 5000.0);

    assert_eq!(
        CashFlowClassifier::risk_tier(sigma, &VolatilityBands::default()),
        FlowRiskTier::Medium
    );
    let cents_scale = VolatilityBands {
        medium_floor: 100.0,
        high_floor: 500.0,
    };
    assert_eq!(
        CashFlowClassifier::risk_tier(sigma, &cents_scale),
        FlowRiskTier::High
    );
}

#[test]
fn six_period_forecast_confidence_is_monotone_with_floor() {
    let config = EngineConfig::default();
    let score =
        BudgetHealthScorer::score(&mid_cycle_snapshot(), sample_date(2025, 6, 1), &config);
    let points = ForecastEngine::project_spending(
        &score,
        &mid_cycle_snapshot(),
        6,
        30,
        &config.forecast_confidence,
    );

    assert_eq!(points.len(), 6);
    assert_eq!(points[0].confidence_pct, 90.0);
    for pair in points.windows(2) {
        assert!(pair[1].confidence_pct <= pair[0].confidence_pct);
    }
    assert!(points.iter().all(|point| point.confidence_pct >= 50.0));
}

#[test]
fn missing_timeline_degrades_rather_than_fails() {
    let snapshot = BudgetSnapshot {
        total_amount: 5000.0,
        spent_amount: 2500.0,
        ..BudgetSnapshot::default()
    };
    let config = EngineConfig::default();
    let score = BudgetHealthScorer::score(&snapshot, sample_date(2025, 6, 1), &config);
    assert_eq!(score.timeline_progress_pct, 0.0);
    assert_eq!(score.burn_rate, 0.0);
    assert_eq!(score.projected_completion, ProjectedCompletion::Unknown);

    // no burn rate means the projection stays flat at the spent amount
    let points = ForecastEngine::project_spending(
        &score,
        &snapshot,
        3,
        30,
        &config.forecast_confidence,
    );
    assert!(points
        .iter()
        .all(|point| point.projected_value == 2500.0));
}
