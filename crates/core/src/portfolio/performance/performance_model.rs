//! Risk metric domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Risk metrics derived from the daily value series and current holdings.
///
/// Percentage fields are already multiplied by 100; the Sharpe ratio is a
/// raw ratio. Every metric degrades to zero when the series is too short
/// for it, never to NaN or infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub volatility_pct: Decimal,
    pub max_drawdown_pct: Decimal,
    pub sharpe_ratio: Decimal,
    pub top_position_weight_pct: Decimal,
    pub position_count: usize,
}
