//! Account store trait.
//!
//! The trait defines the read contract for the external account store
//! without any file-path or format details, allowing different storage
//! implementations.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;

/// Read interface over the account store the trading process maintains.
///
/// Records come back as raw JSON values: validation is domain logic with
/// partial-failure semantics (see [`validate_accounts`]), so the store must
/// not reject a document because one record inside it is malformed.
///
/// A missing or unreadable store is fatal for the run
/// ([`StoreError::NotFound`] / [`StoreError::ReadFailed`]); the previous
/// output artifact is left untouched.
///
/// [`validate_accounts`]: crate::accounts::validate_accounts
/// [`StoreError::NotFound`]: crate::errors::StoreError::NotFound
/// [`StoreError::ReadFailed`]: crate::errors::StoreError::ReadFailed
#[async_trait]
pub trait AccountStoreTrait: Send + Sync {
    /// Loads all raw account records from the store.
    async fn load_accounts(&self) -> Result<Vec<Value>>;
}
