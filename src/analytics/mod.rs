pub mod aggregator;
pub mod cashflow;
pub mod forecast;
pub mod health;
pub mod risk;
pub mod trend;

pub use aggregator::TimeWindowAggregator;
pub use cashflow::{CashFlowClassifier, CashFlowSummary, FlowRiskTier};
pub use forecast::{ForecastEngine, ForecastPoint};
pub use health::{BudgetHealthScorer, HealthScore, ProjectedCompletion};
pub use risk::{MitigationSuggestion, RiskAssessment, RiskEngine, RiskFactor, Severity};
pub use trend::{Momentum, TrendCalculator, WindowComparison};
