//! One-shot export pass wiring the stores and the aggregation together.

use log::{debug, info, warn};
use std::sync::Arc;

use crate::accounts::AccountStoreTrait;
use crate::errors::Result;
use crate::portfolio::aggregator::{aggregate_records, AggregationResult, PortfolioStoreTrait};
use crate::portfolio::holdings::PriceMap;
use crate::settings::DashboardSettings;

/// Runs aggregation passes against a pair of stores.
///
/// Both store handles are injected once at construction and reused for
/// every run; the service never re-acquires them per call.
pub struct ExportService {
    account_store: Arc<dyn AccountStoreTrait>,
    portfolio_store: Arc<dyn PortfolioStoreTrait>,
    settings: DashboardSettings,
}

impl ExportService {
    pub fn new(
        account_store: Arc<dyn AccountStoreTrait>,
        portfolio_store: Arc<dyn PortfolioStoreTrait>,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            account_store,
            portfolio_store,
            settings,
        }
    }

    /// Loads, validates, aggregates, and persists one document.
    ///
    /// Fails only when the account store is unavailable or the artifact
    /// cannot be written; malformed records are skipped and surfaced in the
    /// returned result. All input is loaded up front and the document is
    /// computed fully in memory before the store swaps it into place.
    pub async fn export(&self, prices: &PriceMap) -> Result<AggregationResult> {
        let records = self.account_store.load_accounts().await?;
        debug!("Loaded {} raw account records", records.len());

        let result = aggregate_records(&records, prices, &self.settings);
        for warning in &result.warnings {
            warn!("{}", warning);
        }

        self.portfolio_store.save_portfolio(&result.state).await?;

        info!(
            "Exported portfolio document: {} accounts, {} holdings, {} history days, {} records skipped",
            result.state.accounts.len(),
            result.state.holdings.len(),
            result.state.history.len(),
            result.warnings.len()
        );
        Ok(result)
    }
}
