//! Dashboard CLI commands
//!
//! Renders the highlight summary and the transaction register for the
//! terminal.

use crate::config::LocaleConfig;
use crate::dashboard::{aggregate, HighlightSummary};
use crate::error::CashboardResult;
use crate::models::FormattedTransaction;
use crate::storage::{KeyValueStore, TransactionStore};

/// Print the three highlight figures
pub fn handle_summary<S: KeyValueStore>(
    store: &TransactionStore<S>,
    locale: &LocaleConfig,
) -> CashboardResult<()> {
    let records = store.load()?;
    let (_, summary) = aggregate(&records, locale)?;
    print!("{}", format_summary(&summary));
    Ok(())
}

/// Print the stored transactions as a register
pub fn handle_list<S: KeyValueStore>(
    store: &TransactionStore<S>,
    locale: &LocaleConfig,
) -> CashboardResult<()> {
    let records = store.load()?;
    let (transactions, _) = aggregate(&records, locale)?;
    print!("{}", format_register(&transactions));
    Ok(())
}

/// Format the highlight summary as three labeled rows
pub fn format_summary(summary: &HighlightSummary) -> String {
    let mut output = String::new();

    output.push_str(&summary_row("Entries", &summary.entries, summary.last_entry.as_deref()));
    output.push_str(&summary_row(
        "Expenses",
        &summary.expenses,
        summary.last_expense.as_deref(),
    ));
    output.push_str(&summary_row("Total", &summary.total, summary.period.as_deref()));

    output
}

fn summary_row(label: &str, amount: &str, caption: Option<&str>) -> String {
    match caption {
        Some(caption) => format!("{:<9} {:>16}   {}\n", label, amount, caption),
        None => format!("{:<9} {:>16}\n", label, amount),
    }
}

/// Format a list of transactions as a register
pub fn format_register(transactions: &[FormattedTransaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8}  {:24}  {:14}  {:>14}\n",
        "Date", "Title", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for txn in transactions {
        let amount = if txn.kind.is_income() {
            txn.amount.clone()
        } else {
            format!("-{}", txn.amount)
        };

        output.push_str(&format!(
            "{:8}  {:24}  {:14}  {:>14}\n",
            txn.date,
            truncate(&txn.title, 24),
            truncate(&txn.category.name, 14),
            amount
        ));
    }

    output
}

/// Truncate a string to `max` characters, appending "…" if truncated
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", truncated)
}
