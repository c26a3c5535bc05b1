//! Read-only account store backed by the trading process's JSON state file.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use tradefolio_core::accounts::AccountStoreTrait;
use tradefolio_core::errors::{Result, StoreError};

/// Loads raw account records from a JSON document on disk.
///
/// The document is either a bare array of account records or an object
/// wrapping them under `"accounts"`. Records come back unparsed; validation
/// with partial-failure semantics happens in the core.
pub struct JsonAccountStore {
    path: PathBuf,
}

impl JsonAccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn extract_records(document: Value, path: &str) -> Result<Vec<Value>> {
    match document {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("accounts") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(StoreError::Malformed(format!(
                "{}: expected an array of account records or an object with an 'accounts' array",
                path
            ))
            .into()),
        },
        _ => Err(StoreError::Malformed(format!(
            "{}: expected an array of account records",
            path
        ))
        .into()),
    }
}

#[async_trait]
impl AccountStoreTrait for JsonAccountStore {
    async fn load_accounts(&self) -> Result<Vec<Value>> {
        let display_path = self.path.display().to_string();

        let bytes = fs::read(&self.path).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                StoreError::NotFound(display_path.clone())
            } else {
                StoreError::ReadFailed(format!("{}: {}", display_path, err))
            }
        })?;

        let document: Value = serde_json::from_slice(&bytes)
            .map_err(|err| StoreError::Malformed(format!("{}: {}", display_path, err)))?;

        let records = extract_records(document, &display_path)?;
        debug!("Loaded {} account records from {}", records.len(), display_path);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradefolio_core::errors::Error;

    fn write_store(dir: &tempfile::TempDir, contents: &str) -> JsonAccountStore {
        let path = dir.path().join("trade_state.json");
        std::fs::write(&path, contents).unwrap();
        JsonAccountStore::new(path)
    }

    #[tokio::test]
    async fn test_loads_bare_array_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_store(&dir, r#"[{"account_id": "a"}, {"account_id": "b"}]"#);

        let records = store.load_accounts().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["account_id"], "a");
    }

    #[tokio::test]
    async fn test_loads_wrapped_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_store(&dir, r#"{"accounts": [{"account_id": "a"}]}"#);

        let records = store.load_accounts().await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_store_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonAccountStore::new(dir.path().join("missing.json"));

        let err = store.load_accounts().await.unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unparseable_store_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_store(&dir, "not json at all");

        let err = store.load_accounts().await.unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_store(&dir, r#"{"not_accounts": 1}"#);

        let err = store.load_accounts().await.unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Malformed(_))));
    }
}
