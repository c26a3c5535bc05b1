//! Account domain models and record validation.
//!
//! The account store hands records over as raw JSON values so that one
//! malformed record cannot abort deserialization of the rest.
//! [`validate_accounts`] converts them into domain models, skipping bad
//! accounts, snapshots, and positions individually and collecting a
//! [`RecordWarning`] for each skip.

use chrono::NaiveDateTime;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::{Result, ValidationError};
use crate::utils::time_utils;

/// One timestamped measurement of an account's portfolio state, as recorded
/// by the trading process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: NaiveDateTime,
    /// Account total value (cash + equity) at `timestamp`.
    pub total_value: Decimal,
    pub balance: Decimal,
    /// Producer-reported inception-to-date profit/loss. Carried through
    /// validation but not used to derive summary metrics; the aggregator
    /// recomputes its own P&L from the value series.
    pub pnl: Decimal,
    pub pnl_rate: Decimal,
    pub holdings_count: u32,
}

/// An open position in one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub quantity: Decimal,
    pub avg_price: Decimal,
}

/// Sub-strategy parameters the trading process attaches to a virtual account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    #[serde(default)]
    pub strategy_type: String,
    #[serde(default)]
    pub rise_pct: Decimal,
    #[serde(default)]
    pub dip_pct: Decimal,
    #[serde(default)]
    pub allocation_ratio: Decimal,
    /// The real brokerage account this ledger is split out of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_account_ref: Option<String>,
}

/// Domain model for one tracked trading account.
///
/// `performance_log` is append-only and chronologically ordered by the
/// producer; the aggregator never reorders it.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub account_id: String,
    /// Current cash balance (latest, not historical).
    pub cash: Decimal,
    pub holdings: BTreeMap<String, Position>,
    pub performance_log: Vec<Snapshot>,
    /// Cumulative realized P&L as reported by the trading process.
    pub realized_pnl: Decimal,
    pub strategy: Option<StrategyConfig>,
    pub buy_count: u32,
    pub sell_count: u32,
}

/// Which kind of record a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordScope {
    Account,
    Snapshot,
    Position,
}

/// A diagnostic emitted when a malformed record is skipped during
/// validation. Skips never abort the run; the resulting document stays
/// complete and internally consistent without the skipped record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordWarning {
    pub scope: RecordScope,
    /// Owning account, when it could be determined.
    pub account_id: Option<String>,
    /// Index or instrument code locating the record inside its container.
    pub reference: String,
    pub message: String,
}

impl std::fmt::Display for RecordWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Skipped {:?} record [{}] (account: {}): {}",
            self.scope,
            self.reference,
            self.account_id.as_deref().unwrap_or("?"),
            self.message
        )
    }
}

// === Raw record shapes (producer JSON) ===

#[derive(Debug, Deserialize)]
struct SnapshotRecord {
    #[serde(alias = "time")]
    timestamp: String,
    total_value: Decimal,
    #[serde(default)]
    balance: Decimal,
    #[serde(default)]
    pnl: Decimal,
    #[serde(default)]
    pnl_rate: Decimal,
    #[serde(default)]
    holdings_count: u32,
}

#[derive(Debug, Deserialize)]
struct PositionRecord {
    #[serde(alias = "qty")]
    quantity: Decimal,
    #[serde(alias = "buy_price")]
    avg_price: Option<Decimal>,
    total_cost: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
struct AccountRecord {
    account_id: String,
    #[serde(alias = "balance", default)]
    cash: Decimal,
    #[serde(default)]
    holdings: BTreeMap<String, Value>,
    #[serde(default)]
    performance_log: Vec<Value>,
    #[serde(default)]
    realized_pnl: Decimal,
    #[serde(default)]
    strategy: Option<StrategyConfig>,
    #[serde(default)]
    buy_count: u32,
    #[serde(default)]
    sell_count: u32,
}

/// Converts raw store records into domain accounts.
///
/// Partial-failure semantics: a malformed account, snapshot, or position is
/// skipped with a warning and the rest of the input keeps aggregating.
pub fn validate_accounts(records: &[Value]) -> (Vec<Account>, Vec<RecordWarning>) {
    let mut accounts = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for (index, raw) in records.iter().enumerate() {
        match parse_account(raw, &mut warnings) {
            Ok(account) => accounts.push(account),
            Err(err) => {
                let account_id = raw
                    .get("account_id")
                    .and_then(Value::as_str)
                    .map(String::from);
                warn!("Skipping malformed account record #{}: {}", index, err);
                warnings.push(RecordWarning {
                    scope: RecordScope::Account,
                    account_id,
                    reference: index.to_string(),
                    message: err.to_string(),
                });
            }
        }
    }

    (accounts, warnings)
}

fn parse_account(raw: &Value, warnings: &mut Vec<RecordWarning>) -> Result<Account> {
    let record: AccountRecord = serde_json::from_value(raw.clone())?;

    let mut performance_log = Vec::with_capacity(record.performance_log.len());
    for (index, entry) in record.performance_log.iter().enumerate() {
        match parse_snapshot(entry) {
            Ok(snapshot) => performance_log.push(snapshot),
            Err(err) => {
                warn!(
                    "Skipping malformed snapshot #{} in account {}: {}",
                    index, record.account_id, err
                );
                warnings.push(RecordWarning {
                    scope: RecordScope::Snapshot,
                    account_id: Some(record.account_id.clone()),
                    reference: index.to_string(),
                    message: err.to_string(),
                });
            }
        }
    }

    let mut holdings = BTreeMap::new();
    for (code, entry) in &record.holdings {
        match parse_position(entry) {
            Ok(position) => {
                holdings.insert(code.clone(), position);
            }
            Err(err) => {
                warn!(
                    "Skipping malformed position '{}' in account {}: {}",
                    code, record.account_id, err
                );
                warnings.push(RecordWarning {
                    scope: RecordScope::Position,
                    account_id: Some(record.account_id.clone()),
                    reference: code.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    Ok(Account {
        account_id: record.account_id,
        cash: record.cash,
        holdings,
        performance_log,
        realized_pnl: record.realized_pnl,
        strategy: record.strategy,
        buy_count: record.buy_count,
        sell_count: record.sell_count,
    })
}

fn parse_snapshot(raw: &Value) -> Result<Snapshot> {
    let record: SnapshotRecord = serde_json::from_value(raw.clone())?;
    let timestamp = time_utils::parse_snapshot_timestamp(&record.timestamp)?;

    Ok(Snapshot {
        timestamp,
        total_value: record.total_value,
        balance: record.balance,
        pnl: record.pnl,
        pnl_rate: record.pnl_rate,
        holdings_count: record.holdings_count,
    })
}

fn parse_position(raw: &Value) -> Result<Position> {
    let record: PositionRecord = serde_json::from_value(raw.clone())?;

    if record.quantity < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "negative quantity {}",
            record.quantity
        ))
        .into());
    }

    // The producer writes either avg_price directly or total_cost; derive
    // the former from the latter when only the cost is present.
    let avg_price = match (record.avg_price, record.total_cost) {
        (Some(avg_price), _) => avg_price,
        (None, Some(total_cost)) if record.quantity > Decimal::ZERO => {
            total_cost / record.quantity
        }
        (None, Some(_)) => Decimal::ZERO,
        (None, None) => return Err(ValidationError::MissingField("avg_price".into()).into()),
    };

    Ok(Position {
        quantity: record.quantity,
        avg_price,
    })
}
