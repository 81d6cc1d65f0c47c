//! Core data models for cashboard
//!
//! This module contains the data structures for the dashboard domain:
//! monetary amounts, transaction records, and categories.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::{find_category, CatalogEntry, Category, CATALOG};
pub use money::{Money, MoneyParseError};
pub use transaction::{FormattedTransaction, TransactionKind, TransactionRecord};
