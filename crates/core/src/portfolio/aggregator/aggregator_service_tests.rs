//! Tests for the export service and the document-level aggregation
//! guarantees.

#[cfg(test)]
mod tests {
    use crate::accounts::AccountStoreTrait;
    use crate::errors::{Error, Result, StoreError};
    use crate::portfolio::aggregator::{
        aggregate_records, ExportService, PortfolioState, PortfolioStoreTrait,
    };
    use crate::portfolio::holdings::PriceMap;
    use crate::settings::DashboardSettings;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    struct StaticAccountStore {
        records: Vec<Value>,
    }

    #[async_trait]
    impl AccountStoreTrait for StaticAccountStore {
        async fn load_accounts(&self) -> Result<Vec<Value>> {
            Ok(self.records.clone())
        }
    }

    struct MissingAccountStore;

    #[async_trait]
    impl AccountStoreTrait for MissingAccountStore {
        async fn load_accounts(&self) -> Result<Vec<Value>> {
            Err(StoreError::NotFound("trade_state.json".to_string()).into())
        }
    }

    #[derive(Default)]
    struct MemoryPortfolioStore {
        saved: Mutex<Vec<PortfolioState>>,
    }

    #[async_trait]
    impl PortfolioStoreTrait for MemoryPortfolioStore {
        async fn save_portfolio(&self, state: &PortfolioState) -> Result<()> {
            self.saved.lock().unwrap().push(state.clone());
            Ok(())
        }
    }

    fn two_account_records() -> Vec<Value> {
        vec![
            json!({
                "account_id": "a",
                "cash": 20,
                "performance_log": [
                    {"time": "2025-03-14 15:00:00", "total_value": 100},
                    {"time": "2025-03-15 15:00:00", "total_value": 110}
                ]
            }),
            json!({
                "account_id": "b",
                "cash": 10,
                "performance_log": [
                    {"time": "2025-03-14 15:00:00", "total_value": 50}
                ]
            }),
        ]
    }

    #[tokio::test]
    async fn test_export_writes_aggregated_document() {
        let portfolio_store = Arc::new(MemoryPortfolioStore::default());
        let service = ExportService::new(
            Arc::new(StaticAccountStore {
                records: two_account_records(),
            }),
            portfolio_store.clone(),
            DashboardSettings::default(),
        );

        let result = service.export(&PriceMap::new()).await.unwrap();
        assert!(!result.has_warnings());

        let saved = portfolio_store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        let state = &saved[0];
        // The two-account carry-forward scenario: day 1 = 150, day 2 = 160.
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].value, dec!(150));
        assert_eq!(state.history[1].value, dec!(160));
        assert_eq!(state.summary.total_value, dec!(160));
        assert_eq!(state.summary.daily_pnl, dec!(10));
        assert_eq!(state.accounts.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_account_store_is_fatal_and_writes_nothing() {
        let portfolio_store = Arc::new(MemoryPortfolioStore::default());
        let service = ExportService::new(
            Arc::new(MissingAccountStore),
            portfolio_store.clone(),
            DashboardSettings::default(),
        );

        let err = service.export(&PriceMap::new()).await.unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::NotFound(_))));
        assert!(portfolio_store.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_records_are_reported_not_fatal() {
        let mut records = two_account_records();
        records.push(json!({"cash": 5}));

        let portfolio_store = Arc::new(MemoryPortfolioStore::default());
        let service = ExportService::new(
            Arc::new(StaticAccountStore { records }),
            portfolio_store.clone(),
            DashboardSettings::default(),
        );

        let result = service.export(&PriceMap::new()).await.unwrap();
        assert_eq!(result.warnings.len(), 1);
        // The document is still written, complete without the bad record.
        assert_eq!(portfolio_store.saved.lock().unwrap().len(), 1);
        assert_eq!(result.state.accounts.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_zero_document() {
        let result =
            aggregate_records(&[], &PriceMap::new(), &DashboardSettings::default());

        let state = result.state;
        assert_eq!(state.summary.total_value, Decimal::ZERO);
        assert!(state.history.is_empty());
        assert!(state.holdings.is_empty());
        assert!(state.accounts.is_empty());
        assert!(state.virtual_accounts.is_empty());
        assert!(state.risk.is_none());
    }

    #[test]
    fn test_aggregation_is_idempotent_to_the_byte() {
        let records = two_account_records();
        let settings = DashboardSettings::default();

        let first = aggregate_records(&records, &PriceMap::new(), &settings);
        let second = aggregate_records(&records, &PriceMap::new(), &settings);

        let first_bytes = serde_json::to_vec(&first.state).unwrap();
        let second_bytes = serde_json::to_vec(&second.state).unwrap();
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn test_retention_window_bounds_output_history() {
        let mut log = Vec::new();
        for day in 1..=20u32 {
            log.push(json!({
                "time": format!("2025-03-{:02} 15:00:00", day),
                "total_value": 100 + day
            }));
        }
        let records = vec![json!({
            "account_id": "a",
            "cash": 0,
            "performance_log": log
        })];
        let settings: DashboardSettings =
            serde_json::from_str(r#"{"retention_days": 5}"#).unwrap();

        let result = aggregate_records(&records, &PriceMap::new(), &settings);
        let state = result.state;

        assert_eq!(state.history.len(), 5);
        assert_eq!(state.history[0].value, dec!(116));
        assert_eq!(state.history[4].value, dec!(120));
        // Truncation only bounds the output; the inception baseline stays.
        assert_eq!(state.summary.total_pnl, dec!(19));
    }
}
