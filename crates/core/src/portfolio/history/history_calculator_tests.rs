//! Tests for daily series construction: day grouping, carry-forward, and
//! retention truncation.

#[cfg(test)]
mod tests {
    use crate::accounts::{Account, Snapshot};
    use crate::portfolio::history::{build_daily_series, truncate_to_retention, HistoryPoint};
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn at(date: (i32, u32, u32), hms: (u32, u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(hms.0, hms.1, hms.2)
            .unwrap()
    }

    fn snapshot(timestamp: NaiveDateTime, total_value: Decimal) -> Snapshot {
        Snapshot {
            timestamp,
            total_value,
            balance: Decimal::ZERO,
            pnl: Decimal::ZERO,
            pnl_rate: Decimal::ZERO,
            holdings_count: 0,
        }
    }

    fn account(account_id: &str, snapshots: Vec<Snapshot>) -> Account {
        Account {
            account_id: account_id.to_string(),
            cash: Decimal::ZERO,
            holdings: BTreeMap::new(),
            performance_log: snapshots,
            realized_pnl: Decimal::ZERO,
            strategy: None,
            buy_count: 0,
            sell_count: 0,
        }
    }

    #[test]
    fn test_empty_accounts_yield_empty_series() {
        assert!(build_daily_series(&[]).is_empty());
        assert!(build_daily_series(&[account("a", vec![])]).is_empty());
    }

    #[test]
    fn test_intraday_snapshots_collapse_to_last_of_day() {
        let accounts = vec![account(
            "a",
            vec![
                snapshot(at((2025, 3, 14), (9, 0, 0)), dec!(100)),
                snapshot(at((2025, 3, 14), (12, 0, 0)), dec!(104)),
                snapshot(at((2025, 3, 14), (15, 25, 0)), dec!(101)),
            ],
        )];

        let series = build_daily_series(&accounts);
        assert_eq!(
            series,
            vec![HistoryPoint {
                date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                value: dec!(101),
            }]
        );
    }

    #[test]
    fn test_carry_forward_across_accounts() {
        // Account A reports on both days, account B only on day 1; day 2
        // must include B at its last known value, not zero.
        let accounts = vec![
            account(
                "a",
                vec![
                    snapshot(at((2025, 3, 14), (15, 0, 0)), dec!(100)),
                    snapshot(at((2025, 3, 15), (15, 0, 0)), dec!(110)),
                ],
            ),
            account("b", vec![snapshot(at((2025, 3, 14), (15, 0, 0)), dec!(50))]),
        ];

        let series = build_daily_series(&accounts);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].value, dec!(150));
        assert_eq!(series[1].value, dec!(160));
    }

    #[test]
    fn test_account_contributes_nothing_before_first_snapshot() {
        let accounts = vec![
            account("a", vec![snapshot(at((2025, 3, 14), (15, 0, 0)), dec!(100))]),
            account("b", vec![snapshot(at((2025, 3, 16), (15, 0, 0)), dec!(40))]),
        ];

        let series = build_daily_series(&accounts);
        assert_eq!(series.len(), 2);
        // Day 1: only A. Day 3: A carried at 100 plus B's first value.
        assert_eq!(series[0].value, dec!(100));
        assert_eq!(series[1].value, dec!(140));
    }

    #[test]
    fn test_series_is_ascending_by_date() {
        let accounts = vec![account(
            "a",
            vec![
                snapshot(at((2025, 3, 10), (15, 0, 0)), dec!(90)),
                snapshot(at((2025, 3, 12), (15, 0, 0)), dec!(95)),
                snapshot(at((2025, 3, 11), (15, 0, 0)), dec!(92)),
            ],
        )];

        let dates: Vec<_> = build_daily_series(&accounts)
            .into_iter()
            .map(|point| point.date)
            .collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_truncation_keeps_most_recent_days() {
        let mut snapshots = Vec::new();
        for day in 1..=10 {
            snapshots.push(snapshot(
                at((2025, 3, day), (15, 0, 0)),
                Decimal::from(day),
            ));
        }
        let series = build_daily_series(&[account("a", snapshots)]);

        let truncated = truncate_to_retention(series, 4);
        assert_eq!(truncated.len(), 4);
        assert_eq!(
            truncated[0].date,
            NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
        );
        assert_eq!(
            truncated[3].date,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_truncation_is_a_no_op_within_window() {
        let series = vec![HistoryPoint {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            value: dec!(1),
        }];
        assert_eq!(truncate_to_retention(series.clone(), 60), series);
    }
}
