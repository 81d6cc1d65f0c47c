//! Transaction record models
//!
//! `TransactionRecord` is the persisted form read from the key-value store;
//! `FormattedTransaction` is the display copy derived from it on every load.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CashboardError, CashboardResult};

use super::category::Category;
use super::money::Money;

/// Classification of a record as income or expense
///
/// The persisted amount is always a non-negative magnitude; this enum is the
/// only carrier of the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Income (adds to the entries total)
    Positive,
    /// Expense (adds to the expenses total)
    Negative,
}

impl TransactionKind {
    /// Check if this record counts as income
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "income"),
            Self::Negative => write!(f, "expense"),
        }
    }
}

/// A persisted transaction record
///
/// `amount` and `date` stay in their stored string forms here; parsing
/// happens when the dashboard is built, so a payload written by another
/// client round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique identifier
    pub id: String,

    /// Free-text description
    #[serde(alias = "name")]
    pub title: String,

    /// Decimal amount as stored, always a non-negative magnitude
    pub amount: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Embedded category
    pub category: Category,

    /// ISO-8601-parseable date string
    pub date: String,
}

impl TransactionRecord {
    /// Create a new record with a generated id
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        kind: TransactionKind,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            amount: amount.to_string(),
            kind,
            category,
            date: date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Parse the stored amount into an exact centavo value
    pub fn parsed_amount(&self) -> CashboardResult<Money> {
        Money::parse_stored(&self.amount).map_err(|e| {
            CashboardError::Format(format!("record {}: {}", self.id, e))
        })
    }

    /// Parse the stored date
    ///
    /// Accepts a plain date (`2020-04-13`) or a full RFC 3339 timestamp as
    /// written by other clients; only the date part is kept.
    pub fn parsed_date(&self) -> CashboardResult<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.date) {
            return Ok(dt.date_naive());
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| {
            CashboardError::Format(format!(
                "record {}: invalid date {:?}",
                self.id, self.date
            ))
        })
    }
}

/// A display copy of a record
///
/// Identity and category pass through unchanged; `amount` and `date` are
/// locale-formatted strings. Recomputed on every load, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedTransaction {
    /// Same identity as the source record
    pub id: String,

    /// Free-text description, unchanged
    pub title: String,

    /// Locale-formatted currency string (magnitude; sign lives in `kind`)
    pub amount: String,

    /// Income or expense, unchanged
    pub kind: TransactionKind,

    /// Embedded category, unchanged
    pub category: Category,

    /// Locale short date (`DD/MM/YY`)
    pub date: String,
}
