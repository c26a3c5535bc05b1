//! Accounts module - domain models, record validation, and store traits.

mod accounts_model;
mod accounts_traits;

// Re-export the public interface
pub use accounts_model::{
    validate_accounts, Account, Position, RecordScope, RecordWarning, Snapshot, StrategyConfig,
};
pub use accounts_traits::AccountStoreTrait;
