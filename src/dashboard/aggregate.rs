//! Transaction aggregation
//!
//! The pure, synchronous transform at the heart of the dashboard: one pass
//! sums the records into exact totals, a second produces the display copies.
//! No partial output: any unparseable record fails the whole call.

use chrono::NaiveDate;

use crate::config::LocaleConfig;
use crate::error::CashboardResult;
use crate::format;
use crate::models::{FormattedTransaction, Money, TransactionKind, TransactionRecord};

/// Exact running totals over a record collection
///
/// Sums are commutative, so the totals are order-independent; all arithmetic
/// stays in centavos, so `entries - expenses == net()` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of amounts where the kind is income
    pub entries: Money,
    /// Sum of amounts where the kind is expense
    pub expenses: Money,
}

impl Totals {
    /// Accumulate totals over the records in a single pass
    pub fn of(records: &[TransactionRecord]) -> CashboardResult<Self> {
        let mut totals = Self::default();

        for record in records {
            let amount = record.parsed_amount()?;
            match record.kind {
                TransactionKind::Positive => totals.entries += amount,
                TransactionKind::Negative => totals.expenses += amount,
            }
        }

        Ok(totals)
    }

    /// The net total: entries minus expenses
    pub fn net(&self) -> Money {
        self.entries - self.expenses
    }
}

/// The three headline aggregates, formatted for display
///
/// The caption fields carry the dates the view renders under each figure:
/// the latest income and expense dates, and the covered period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSummary {
    /// Formatted sum of income amounts
    pub entries: String,
    /// Formatted sum of expense amounts
    pub expenses: String,
    /// Formatted net total (entries minus expenses)
    pub total: String,
    /// Day-and-month of the most recent income record
    pub last_entry: Option<String>,
    /// Day-and-month of the most recent expense record
    pub last_expense: Option<String>,
    /// Covered period caption, up to the most recent record
    pub period: Option<String>,
}

/// Aggregate a record collection into display copies and highlight totals
///
/// The output list preserves input order and length exactly. The whole call
/// fails on the first record whose amount or date cannot be parsed.
pub fn aggregate(
    records: &[TransactionRecord],
    locale: &LocaleConfig,
) -> CashboardResult<(Vec<FormattedTransaction>, HighlightSummary)> {
    let totals = Totals::of(records)?;

    let mut formatted = Vec::with_capacity(records.len());
    let mut last_entry: Option<NaiveDate> = None;
    let mut last_expense: Option<NaiveDate> = None;

    for record in records {
        let amount = record.parsed_amount()?;
        let date = record.parsed_date()?;

        let latest = match record.kind {
            TransactionKind::Positive => &mut last_entry,
            TransactionKind::Negative => &mut last_expense,
        };
        *latest = Some(latest.map_or(date, |d| d.max(date)));

        formatted.push(FormattedTransaction {
            id: record.id.clone(),
            title: record.title.clone(),
            amount: format::currency(amount, locale),
            kind: record.kind,
            category: record.category.clone(),
            date: format::short_date(date),
        });
    }

    let latest_overall = match (last_entry, last_expense) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };

    let summary = HighlightSummary {
        entries: format::currency(totals.entries, locale),
        expenses: format::currency(totals.expenses, locale),
        total: format::currency(totals.net(), locale),
        last_entry: last_entry.map(|d| format::day_month(d, locale)),
        last_expense: last_expense.map(|d| format::day_month(d, locale)),
        period: latest_overall.map(|d| format::period_caption(d, locale)),
    };

    Ok((formatted, summary))
}
