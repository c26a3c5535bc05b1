//! Daily value history - day grouping, carry-forward, and retention.

mod history_calculator;
mod history_model;

pub use history_calculator::{build_daily_series, truncate_to_retention};
pub use history_model::HistoryPoint;

#[cfg(test)]
mod history_calculator_tests;
