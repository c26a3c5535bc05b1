//! Risk metrics over the daily value series.

mod performance_calculator;
mod performance_model;

pub use performance_calculator::{
    annualized_volatility, build_risk_metrics, daily_returns, max_drawdown, sharpe_ratio,
};
pub use performance_model::RiskMetrics;
