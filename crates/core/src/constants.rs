/// Number of daily history points retained in the output document
pub const DEFAULT_RETENTION_DAYS: usize = 60;

/// Trading days per year, used to annualize daily risk metrics
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Decimal precision for percentage and ratio fields in the output document
pub const PERCENT_PRECISION: u32 = 2;

/// Timestamp format written by the trading process
pub const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fallback timestamp format for ISO-8601 producers
pub const SNAPSHOT_TIMESTAMP_FORMAT_ISO: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Sector assigned to instruments missing from the registry
pub const UNKNOWN_SECTOR: &str = "Unknown";
