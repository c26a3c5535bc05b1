//! Settings module - aggregation parameters and the instrument registry.

mod settings_model;

pub use settings_model::{DashboardSettings, InstrumentProfile};
