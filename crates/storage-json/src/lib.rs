//! JSON document storage for Tradefolio.
//!
//! This crate is the only place in the pipeline where file paths exist. It
//! implements the store traits defined in `tradefolio-core`:
//! - the read-only account store (the trading process's state file)
//! - the output artifact store (atomic replacement of `portfolio.json`)
//!
//! ```text
//!   core (domain, traits)
//!            │
//!            ▼
//!   storage-json (this crate)
//!            │
//!            ▼
//!   trade_state.json / portfolio.json
//! ```

pub mod account_store;
pub mod portfolio_store;

pub use account_store::JsonAccountStore;
pub use portfolio_store::JsonPortfolioStore;
