//! Output artifact store with atomic replacement.

use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;
use tokio::fs;

use tradefolio_core::errors::{Result, StoreError};
use tradefolio_core::portfolio::{PortfolioState, PortfolioStoreTrait};

/// Persists the portfolio-state document to disk.
///
/// Writes are atomic: the document is serialized fully in memory, written
/// to a temporary sibling file, then renamed into place. A dashboard reader
/// polling the path never observes a half-written document, and a failed
/// write leaves the previous document intact.
pub struct JsonPortfolioStore {
    path: PathBuf,
}

impl JsonPortfolioStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PortfolioStoreTrait for JsonPortfolioStore {
    async fn save_portfolio(&self, state: &PortfolioState) -> Result<()> {
        let display_path = self.path.display().to_string();

        let json = serde_json::to_vec_pretty(state)
            .map_err(|err| StoreError::WriteFailed(format!("{}: {}", display_path, err)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|err| {
                    StoreError::WriteFailed(format!("{}: {}", parent.display(), err))
                })?;
            }
        }

        // Temp file lives next to the target so the rename stays on one
        // filesystem and is atomic.
        let temp_path = self.temp_path();
        fs::write(&temp_path, &json).await.map_err(|err| {
            StoreError::WriteFailed(format!("{}: {}", temp_path.display(), err))
        })?;
        fs::rename(&temp_path, &self.path).await.map_err(|err| {
            StoreError::WriteFailed(format!("{}: {}", display_path, err))
        })?;

        debug!("Wrote portfolio document to {} ({} bytes)", display_path, json.len());
        Ok(())
    }
}
