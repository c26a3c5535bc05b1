//! The aggregation operation.

use serde_json::Value;

use crate::accounts::{validate_accounts, Account};
use crate::portfolio::aggregator::{AggregationResult, PortfolioState};
use crate::portfolio::history::{build_daily_series, truncate_to_retention};
use crate::portfolio::holdings::{build_holdings, PriceMap};
use crate::portfolio::performance::build_risk_metrics;
use crate::portfolio::summary::{
    build_account_summaries, build_summary, build_virtual_account_summaries,
};
use crate::settings::DashboardSettings;

/// Aggregates validated accounts into the portfolio-state document.
///
/// Pure and deterministic: the same inputs always produce the same
/// document, so repeated runs over unchanged data are byte-identical.
/// Empty input yields the zero-valued state and never errors.
pub fn aggregate(
    accounts: &[Account],
    prices: &PriceMap,
    settings: &DashboardSettings,
) -> PortfolioState {
    if accounts.is_empty() {
        return PortfolioState::empty();
    }

    // Summary P&L and risk need the untruncated series; only the output
    // history is bounded by the retention window.
    let full_series = build_daily_series(accounts);
    let holdings = build_holdings(accounts, prices, settings);
    let account_summaries = build_account_summaries(accounts, prices);
    let virtual_accounts = build_virtual_account_summaries(accounts, prices);
    let summary = build_summary(&account_summaries, &full_series, &holdings, accounts);
    let risk = build_risk_metrics(&full_series, &holdings, settings);
    let history = truncate_to_retention(full_series, settings.retention_days);

    PortfolioState {
        summary,
        history,
        holdings,
        accounts: account_summaries,
        virtual_accounts,
        risk,
    }
}

/// Validates raw store records and aggregates the survivors.
///
/// Malformed records are skipped and reported through the result's
/// warnings; they never abort the run.
pub fn aggregate_records(
    records: &[Value],
    prices: &PriceMap,
    settings: &DashboardSettings,
) -> AggregationResult {
    let (accounts, warnings) = validate_accounts(records);
    AggregationResult::with_warnings(aggregate(&accounts, prices, settings), warnings)
}
