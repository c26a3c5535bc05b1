//! Holdings view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current market prices keyed by instrument code.
pub type PriceMap = HashMap<String, Decimal>;

/// One dashboard holdings row.
///
/// Positions from different accounts in the same instrument stay distinct so
/// the account column survives into the table view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingView {
    pub name: String,
    pub symbol: String,
    pub sector: String,
    pub quantity: Decimal,
    pub avg_price: Decimal,
    pub current_price: Decimal,
    pub value: Decimal,
    pub pnl: Decimal,
    pub pnl_percent: Decimal,
    pub account: String,
}
