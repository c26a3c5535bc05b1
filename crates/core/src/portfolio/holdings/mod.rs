//! Holdings valuation - one dashboard row per open position.

mod holdings_calculator;
mod holdings_model;

pub use holdings_calculator::{account_equity_value, build_holdings};
pub use holdings_model::{HoldingView, PriceMap};
