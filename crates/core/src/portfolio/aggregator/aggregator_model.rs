//! Portfolio-state document models.

use serde::{Deserialize, Serialize};

use crate::accounts::RecordWarning;
use crate::portfolio::history::HistoryPoint;
use crate::portfolio::holdings::HoldingView;
use crate::portfolio::performance::RiskMetrics;
use crate::portfolio::summary::{AccountSummary, PortfolioSummary, VirtualAccountSummary};

/// The portfolio-state document consumed by the dashboard.
///
/// Rebuilt whole on every aggregation run and atomically replaced in the
/// store; it has no identity beyond "latest output". Field names are the
/// dashboard contract and must stay snake_case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioState {
    pub summary: PortfolioSummary,
    pub history: Vec<HistoryPoint>,
    pub holdings: Vec<HoldingView>,
    pub accounts: Vec<AccountSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_accounts: Vec<VirtualAccountSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskMetrics>,
}

impl PortfolioState {
    /// The zero-valued state produced for empty input.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Result of one aggregation run: the document plus the records skipped on
/// the way. The document is always complete and internally consistent;
/// warnings report what was left out.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    pub state: PortfolioState,
    pub warnings: Vec<RecordWarning>,
}

impl AggregationResult {
    pub fn new(state: PortfolioState) -> Self {
        Self {
            state,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(state: PortfolioState, warnings: Vec<RecordWarning>) -> Self {
        Self { state, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
