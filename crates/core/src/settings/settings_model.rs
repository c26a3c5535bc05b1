//! Aggregation settings and the instrument registry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{DEFAULT_RETENTION_DAYS, UNKNOWN_SECTOR};
use crate::errors::{Error, Result};

/// Display metadata for one instrument code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentProfile {
    pub name: Option<String>,
    pub sector: Option<String>,
}

/// Parameters of one aggregation run, deserialized from the settings file.
/// Every field has a default so an empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Maximum number of daily history points kept in the output document.
    pub retention_days: usize,
    /// Annual risk-free rate used for the Sharpe ratio (e.g. 0.03 = 3%).
    pub risk_free_rate: Decimal,
    /// Instrument code -> display name and sector.
    pub instruments: BTreeMap<String, InstrumentProfile>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        DashboardSettings {
            retention_days: DEFAULT_RETENTION_DAYS,
            risk_free_rate: Decimal::ZERO,
            instruments: BTreeMap::new(),
        }
    }
}

impl DashboardSettings {
    /// Display name for an instrument code, falling back to the code itself.
    pub fn display_name(&self, code: &str) -> String {
        self.instruments
            .get(code)
            .and_then(|profile| profile.name.clone())
            .unwrap_or_else(|| code.to_string())
    }

    /// Sector for an instrument code, falling back to `"Unknown"`.
    pub fn sector(&self, code: &str) -> String {
        self.instruments
            .get(code)
            .and_then(|profile| profile.sector.clone())
            .unwrap_or_else(|| UNKNOWN_SECTOR.to_string())
    }

    /// Validates the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.retention_days == 0 {
            return Err(Error::InvalidConfigValue(
                "retention_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
