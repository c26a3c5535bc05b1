//! Builds the portfolio-wide daily value series from per-account snapshot
//! logs.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

use crate::accounts::Account;
use crate::portfolio::history::HistoryPoint;

/// Collapses an account's snapshot log to one value per calendar day.
///
/// The log is chronologically ordered, so the last write for a day wins:
/// intraday snapshots collapse to the day's last snapshot. Dates come from
/// the snapshot's own timestamp, as recorded, with no timezone conversion.
fn daily_closes(account: &Account) -> BTreeMap<NaiveDate, Decimal> {
    let mut closes = BTreeMap::new();
    for snapshot in &account.performance_log {
        closes.insert(snapshot.timestamp.date(), snapshot.total_value);
    }
    closes
}

/// Builds the untruncated daily value series across all accounts, ascending
/// by date, one point per distinct day.
///
/// Days where an account has no snapshot reuse that account's last known
/// value (carry-forward) so a missing account-day never makes the portfolio
/// total dip artificially. Days before an account's first snapshot
/// contribute nothing for that account.
pub fn build_daily_series(accounts: &[Account]) -> Vec<HistoryPoint> {
    let per_account: Vec<BTreeMap<NaiveDate, Decimal>> =
        accounts.iter().map(daily_closes).collect();

    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    for closes in &per_account {
        dates.extend(closes.keys().copied());
    }

    let mut carried: Vec<Option<Decimal>> = vec![None; per_account.len()];
    let mut series = Vec::with_capacity(dates.len());

    for date in dates {
        let mut total = Decimal::ZERO;
        for (index, closes) in per_account.iter().enumerate() {
            if let Some(value) = closes.get(&date) {
                carried[index] = Some(*value);
            }
            if let Some(value) = carried[index] {
                total += value;
            }
        }
        series.push(HistoryPoint { date, value: total });
    }

    series
}

/// Drops the oldest entries until at most `retention_days` remain.
/// Remaining entries keep their order.
pub fn truncate_to_retention(
    series: Vec<HistoryPoint>,
    retention_days: usize,
) -> Vec<HistoryPoint> {
    if series.len() <= retention_days {
        return series;
    }
    let dropped = series.len() - retention_days;
    debug!(
        "History truncated to {} days ({} oldest entries dropped)",
        retention_days, dropped
    );
    series.into_iter().skip(dropped).collect()
}
