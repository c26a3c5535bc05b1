//! Output artifact store trait.

use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolio::aggregator::PortfolioState;

/// Write interface for the output artifact.
///
/// Implementations must replace the artifact atomically (compute fully in
/// memory, write to a temporary location, rename into place) so a reader
/// never observes a half-written document. On failure the previous artifact
/// must remain intact.
#[async_trait]
pub trait PortfolioStoreTrait: Send + Sync {
    /// Persists the document, fully replacing the previous one.
    async fn save_portfolio(&self, state: &PortfolioState) -> Result<()>;
}
