//! Risk metric calculations.
//!
//! All metrics operate on the untruncated daily series. Short series and
//! zero denominators yield zero, never an invalid numeric result.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::{PERCENT_PRECISION, TRADING_DAYS_PER_YEAR};
use crate::portfolio::history::HistoryPoint;
use crate::portfolio::holdings::HoldingView;
use crate::portfolio::performance::RiskMetrics;
use crate::settings::DashboardSettings;
use crate::utils::decimal_utils::percent_of;

/// √252, used when the exact square root is unavailable.
const SQRT_TRADING_DAYS_APPROX: Decimal = dec!(15.8745);

fn annualization_factor() -> Decimal {
    Decimal::from(TRADING_DAYS_PER_YEAR)
        .sqrt()
        .unwrap_or(SQRT_TRADING_DAYS_APPROX)
}

/// Daily simple returns from the value series, as raw ratios.
/// A day following a zero or negative total is skipped rather than
/// producing an invalid ratio.
pub fn daily_returns(series: &[HistoryPoint]) -> Vec<Decimal> {
    series
        .windows(2)
        .filter_map(|pair| {
            let previous = &pair[0];
            let current = &pair[1];
            if previous.value <= Decimal::ZERO {
                None
            } else {
                Some(current.value / previous.value - Decimal::ONE)
            }
        })
        .collect()
}

/// Sample standard deviation of the returns; zero for fewer than two points.
fn standard_deviation(returns: &[Decimal]) -> Decimal {
    if returns.len() < 2 {
        return Decimal::ZERO;
    }

    let count = Decimal::from(returns.len());
    let mean = returns.iter().copied().sum::<Decimal>() / count;
    let sum_squared_diff: Decimal = returns
        .iter()
        .map(|&value| {
            let diff = value - mean;
            diff * diff
        })
        .sum();

    let variance = sum_squared_diff / (count - Decimal::ONE);
    if variance.is_sign_negative() {
        return Decimal::ZERO;
    }
    variance.sqrt().unwrap_or(Decimal::ZERO)
}

/// Annualized volatility of the daily returns, as a percentage.
pub fn annualized_volatility(returns: &[Decimal]) -> Decimal {
    (standard_deviation(returns) * annualization_factor() * dec!(100))
        .round_dp(PERCENT_PRECISION)
}

/// Maximum peak-to-trough decline of the value series, as a percentage.
pub fn max_drawdown(series: &[HistoryPoint]) -> Decimal {
    let mut peak = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;

    for point in series {
        peak = peak.max(point.value);
        if peak > Decimal::ZERO {
            let drawdown = (peak - point.value) / peak;
            max_drawdown = max_drawdown.max(drawdown);
        }
    }

    (max_drawdown * dec!(100)).round_dp(PERCENT_PRECISION)
}

/// Annualized Sharpe ratio of the daily returns.
///
/// `risk_free_rate` is annual and converted to a daily rate over the
/// trading-day year. Zero standard deviation yields zero.
pub fn sharpe_ratio(returns: &[Decimal], risk_free_rate: Decimal) -> Decimal {
    if returns.len() < 2 {
        return Decimal::ZERO;
    }

    let std_dev = standard_deviation(returns);
    if std_dev.is_zero() {
        return Decimal::ZERO;
    }

    let mean = returns.iter().copied().sum::<Decimal>() / Decimal::from(returns.len());
    let daily_risk_free = risk_free_rate / Decimal::from(TRADING_DAYS_PER_YEAR);
    let excess_return = mean - daily_risk_free;

    (excess_return / std_dev * annualization_factor()).round_dp(PERCENT_PRECISION)
}

/// Builds the risk block, or `None` when there is nothing to measure.
pub fn build_risk_metrics(
    series: &[HistoryPoint],
    holdings: &[HoldingView],
    settings: &DashboardSettings,
) -> Option<RiskMetrics> {
    if series.is_empty() && holdings.is_empty() {
        return None;
    }

    let returns = daily_returns(series);
    let total_holdings_value: Decimal = holdings.iter().map(|row| row.value).sum();
    // Holdings are sorted largest first, so the top weight is the first row.
    let top_position_weight_pct = holdings
        .first()
        .map(|row| percent_of(row.value, total_holdings_value))
        .unwrap_or(Decimal::ZERO);

    Some(RiskMetrics {
        volatility_pct: annualized_volatility(&returns),
        max_drawdown_pct: max_drawdown(series),
        sharpe_ratio: sharpe_ratio(&returns, settings.risk_free_rate),
        top_position_weight_pct,
        position_count: holdings.len(),
    })
}
