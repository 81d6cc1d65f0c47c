//! Record CLI commands
//!
//! Creating records, listing the category catalog, and clearing the store.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};

use crate::error::{CashboardError, CashboardResult};
use crate::models::{find_category, Money, TransactionKind, TransactionRecord, CATALOG};
use crate::storage::{KeyValueStore, TransactionStore};

/// Create a record and append it to the stored collection
pub fn handle_add<S: KeyValueStore>(
    store: &mut TransactionStore<S>,
    title: &str,
    amount: &str,
    kind: &str,
    category_key: &str,
    date: Option<&str>,
) -> CashboardResult<()> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CashboardError::Validation("Title cannot be empty".into()));
    }

    let amount = Money::parse_stored(amount)
        .map_err(|e| CashboardError::Validation(e.to_string()))?;

    let kind = match kind {
        "income" => TransactionKind::Positive,
        "expense" => TransactionKind::Negative,
        other => {
            return Err(CashboardError::Validation(format!(
                "Unknown kind {:?}, expected \"income\" or \"expense\"",
                other
            )))
        }
    };

    let category = find_category(category_key)
        .ok_or_else(|| {
            CashboardError::Validation(format!(
                "Unknown category key {:?} (see `cashboard categories`)",
                category_key
            ))
        })?
        .to_category();

    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            CashboardError::Validation(format!("Invalid date {:?}, expected YYYY-MM-DD", s))
        })?,
        None => Local::now().date_naive(),
    };

    let record = TransactionRecord::new(title, amount, kind, category, date);
    store.append(record)?;

    println!("Added {:?} ({} {})", title, kind, amount);
    Ok(())
}

/// Print the category catalog
pub fn handle_categories() {
    print!("{}", format_catalog());
}

/// Format the category catalog as key/name/icon rows
pub fn format_catalog() -> String {
    let mut output = String::new();
    output.push_str(&format!("{:10}  {:14}  {}\n", "Key", "Name", "Icon"));
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for entry in CATALOG {
        output.push_str(&format!(
            "{:10}  {:14}  {}\n",
            entry.key, entry.name, entry.icon
        ));
    }

    output
}

/// Delete the whole stored collection, asking for confirmation unless forced
pub fn handle_clear<S: KeyValueStore>(
    store: &mut TransactionStore<S>,
    force: bool,
) -> CashboardResult<()> {
    if !force && !confirm("Delete all stored transactions? [y/N] ")? {
        println!("Aborted.");
        return Ok(());
    }

    store.clear()?;
    println!("All transactions deleted.");
    Ok(())
}

fn confirm(prompt: &str) -> CashboardResult<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
