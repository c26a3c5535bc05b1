//! Values every open position across all accounts.

use log::debug;
use rust_decimal::Decimal;

use crate::accounts::Account;
use crate::portfolio::holdings::{HoldingView, PriceMap};
use crate::settings::DashboardSettings;
use crate::utils::decimal_utils::percent_of;

/// Current price for a position, falling back to its average cost.
///
/// The fallback keeps valuation total-value-safe when market data is stale
/// or absent, at the cost of reporting zero unrealized P&L for that row.
fn resolve_price(code: &str, avg_price: Decimal, prices: &PriceMap) -> Decimal {
    match prices.get(code) {
        Some(price) => *price,
        None => {
            debug!("No market price for {}; valuing at average cost", code);
            avg_price
        }
    }
}

/// Builds the holdings table: the union across all accounts of positions
/// with quantity > 0, one row per (account, instrument), largest value
/// first. The sort is stable, so equal values keep account and code order.
pub fn build_holdings(
    accounts: &[Account],
    prices: &PriceMap,
    settings: &DashboardSettings,
) -> Vec<HoldingView> {
    let mut rows = Vec::new();

    for account in accounts {
        for (code, position) in &account.holdings {
            if position.quantity <= Decimal::ZERO {
                continue;
            }

            let current_price = resolve_price(code, position.avg_price, prices);
            let value = position.quantity * current_price;
            let cost = position.quantity * position.avg_price;
            let pnl = value - cost;

            rows.push(HoldingView {
                name: settings.display_name(code),
                symbol: code.clone(),
                sector: settings.sector(code),
                quantity: position.quantity,
                avg_price: position.avg_price,
                current_price,
                value,
                pnl,
                pnl_percent: percent_of(pnl, cost),
                account: account.account_id.clone(),
            });
        }
    }

    rows.sort_by(|a, b| b.value.cmp(&a.value));
    rows
}

/// Market value of one account's open positions, with the same price
/// fallback as the holdings table.
pub fn account_equity_value(account: &Account, prices: &PriceMap) -> Decimal {
    account
        .holdings
        .iter()
        .filter(|(_, position)| position.quantity > Decimal::ZERO)
        .map(|(code, position)| {
            position.quantity * resolve_price(code, position.avg_price, prices)
        })
        .sum()
}
