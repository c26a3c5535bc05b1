//! Summary metric calculations.

use rust_decimal::Decimal;

use crate::accounts::Account;
use crate::portfolio::history::HistoryPoint;
use crate::portfolio::holdings::{account_equity_value, HoldingView, PriceMap};
use crate::portfolio::summary::{AccountSummary, PortfolioSummary, VirtualAccountSummary};
use crate::utils::decimal_utils::percent_of;

/// Latest reported total value for an account: the last snapshot when the
/// log is non-empty, otherwise current cash plus the market value of open
/// positions.
pub fn account_latest_value(account: &Account, prices: &PriceMap) -> Decimal {
    match account.performance_log.last() {
        Some(snapshot) => snapshot.total_value,
        None => account.cash + account_equity_value(account, prices),
    }
}

/// One breakdown row per input account, in input order.
pub fn build_account_summaries(accounts: &[Account], prices: &PriceMap) -> Vec<AccountSummary> {
    accounts
        .iter()
        .map(|account| {
            let total_value = account_latest_value(account, prices);
            AccountSummary {
                name: account.account_id.clone(),
                total_value,
                cash: account.cash,
                equity: total_value - account.cash,
            }
        })
        .collect()
}

/// Sub-strategy rows for accounts carrying a strategy block, in input order.
pub fn build_virtual_account_summaries(
    accounts: &[Account],
    prices: &PriceMap,
) -> Vec<VirtualAccountSummary> {
    accounts
        .iter()
        .filter_map(|account| {
            let strategy = account.strategy.as_ref()?;
            let total_value = account_latest_value(account, prices);
            Some(VirtualAccountSummary {
                name: account.account_id.clone(),
                total_value,
                cash: account.cash,
                equity: total_value - account.cash,
                strategy_type: strategy.strategy_type.clone(),
                rise_pct: strategy.rise_pct,
                dip_pct: strategy.dip_pct,
                allocation_ratio: strategy.allocation_ratio,
                buy_count: account.buy_count,
                sell_count: account.sell_count,
                real_account_ref: strategy.real_account_ref.clone(),
            })
        })
        .collect()
}

/// Builds the summary block.
///
/// P&L derives from the untruncated daily series so retention never moves
/// the inception baseline: `total_pnl` is latest minus first recorded daily
/// total, `daily_pnl` is latest minus the previous day. Both are zero when
/// fewer than two days exist, and every rate guards a non-positive baseline
/// by yielding zero.
pub fn build_summary(
    account_summaries: &[AccountSummary],
    full_series: &[HistoryPoint],
    holdings: &[HoldingView],
    accounts: &[Account],
) -> PortfolioSummary {
    let total_value: Decimal = account_summaries.iter().map(|entry| entry.total_value).sum();
    let cash: Decimal = account_summaries.iter().map(|entry| entry.cash).sum();

    let (total_pnl, total_return) = match (full_series.first(), full_series.last()) {
        (Some(first), Some(last)) if full_series.len() >= 2 => {
            let pnl = last.value - first.value;
            (pnl, percent_of(pnl, first.value))
        }
        _ => (Decimal::ZERO, Decimal::ZERO),
    };

    let (daily_pnl, daily_return) = if full_series.len() >= 2 {
        let last = &full_series[full_series.len() - 1];
        let previous = &full_series[full_series.len() - 2];
        let pnl = last.value - previous.value;
        (pnl, percent_of(pnl, previous.value))
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    PortfolioSummary {
        total_value,
        daily_pnl,
        daily_return,
        total_pnl,
        total_return,
        cash,
        cash_percent: percent_of(cash, total_value),
        unrealized_pnl: holdings.iter().map(|row| row.pnl).sum(),
        realized_pnl: accounts.iter().map(|account| account.realized_pnl).sum(),
    }
}
