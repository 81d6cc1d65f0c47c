//! cashboard - Personal-finance dashboard core
//!
//! This library implements the data side of a transactions dashboard:
//! persisted records are read from a key-value store, summed into highlight
//! totals, and converted into locale-formatted display copies.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Locale/currency configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, records, categories)
//! - `storage`: Key-value store abstraction and the transaction repository
//! - `format`: Locale-aware currency and date formatting
//! - `dashboard`: The aggregation transform and load coordination
//! - `cli`: Terminal command handlers
//!
//! # Example
//!
//! ```rust
//! use cashboard::config::LocaleConfig;
//! use cashboard::dashboard::Dashboard;
//! use cashboard::storage::MemoryStore;
//!
//! let mut dashboard = Dashboard::new(MemoryStore::new(), LocaleConfig::pt_br());
//! let data = dashboard.load().expect("empty store loads cleanly");
//! assert_eq!(data.summary.total, "R$ 0,00");
//! ```

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod models;
pub mod storage;

pub use dashboard::{aggregate, Dashboard, DashboardData, FocusNotifier, HighlightSummary, Totals};
pub use error::{CashboardError, CashboardResult};
