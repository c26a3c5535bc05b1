//! Summary metrics and the per-account breakdown.

mod summary_calculator;
mod summary_model;

pub use summary_calculator::{
    account_latest_value, build_account_summaries, build_summary, build_virtual_account_summaries,
};
pub use summary_model::{AccountSummary, PortfolioSummary, VirtualAccountSummary};
