//! Summary domain models.
//!
//! Field names and units follow the dashboard contract: snake_case keys,
//! monetary fields in the input currency, percentage fields already
//! multiplied by 100.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level dashboard summary block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub daily_pnl: Decimal,
    pub daily_return: Decimal,
    pub total_pnl: Decimal,
    pub total_return: Decimal,
    pub cash: Decimal,
    pub cash_percent: Decimal,
    pub unrealized_pnl: Decimal,
    pub realized_pnl: Decimal,
}

/// Per-account breakdown row. `equity` is always `total_value - cash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub name: String,
    pub total_value: Decimal,
    pub cash: Decimal,
    pub equity: Decimal,
}

/// Sub-strategy ledger breakdown for accounts carrying a strategy block.
///
/// These rows mirror the account entry the same record already produced;
/// summary totals are computed over `accounts` only, so virtual entries
/// never double-count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualAccountSummary {
    pub name: String,
    pub total_value: Decimal,
    pub cash: Decimal,
    pub equity: Decimal,
    pub strategy_type: String,
    pub rise_pct: Decimal,
    pub dip_pct: Decimal,
    pub allocation_ratio: Decimal,
    pub buy_count: u32,
    pub sell_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_account_ref: Option<String>,
}
