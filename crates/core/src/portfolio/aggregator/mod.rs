//! The aggregation step - accounts in, portfolio-state document out.

mod aggregator_calculator;
mod aggregator_model;
mod aggregator_service;
mod aggregator_traits;

pub use aggregator_calculator::{aggregate, aggregate_records};
pub use aggregator_model::{AggregationResult, PortfolioState};
pub use aggregator_service::ExportService;
pub use aggregator_traits::PortfolioStoreTrait;

#[cfg(test)]
mod aggregator_service_tests;
