//! Dashboard load coordination
//!
//! [`Dashboard`] is what the view layer talks to: it reads the persisted
//! collection, runs the aggregator, and publishes the result together with a
//! loading flag. On any error the flag is cleared, the error is surfaced,
//! and previously published data is left untouched.

pub mod aggregate;
pub mod focus;

pub use aggregate::{aggregate, HighlightSummary, Totals};
pub use focus::FocusNotifier;

use crate::config::LocaleConfig;
use crate::error::CashboardResult;
use crate::models::FormattedTransaction;
use crate::storage::{KeyValueStore, TransactionStore};

/// One published dashboard state: the formatted list plus the highlights
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    /// Display copies, in stored order, keyed by record id
    pub transactions: Vec<FormattedTransaction>,
    /// The three headline aggregates with their captions
    pub summary: HighlightSummary,
}

/// The dashboard load coordinator
///
/// Synchronous; a caller wanting reload-on-focus wires `load` into a
/// [`FocusNotifier`]. Overlapping loads are not guarded here: `load` takes
/// `&mut self`, so callers are serialized per instance and the last
/// completed load wins.
#[derive(Debug)]
pub struct Dashboard<S> {
    store: TransactionStore<S>,
    locale: LocaleConfig,
    loading: bool,
    data: Option<DashboardData>,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Create a dashboard over the given store backend
    pub fn new(backend: S, locale: LocaleConfig) -> Self {
        Self {
            store: TransactionStore::new(backend),
            locale,
            loading: false,
            data: None,
        }
    }

    /// Load the stored records and publish a fresh dashboard state
    ///
    /// The loading flag is set for the duration of the call and cleared on
    /// both success and failure. On failure nothing is published: `data()`
    /// keeps returning the previous state.
    pub fn load(&mut self) -> CashboardResult<&DashboardData> {
        self.loading = true;
        let result = self.run_load();
        self.loading = false;

        let data = result?;
        Ok(self.data.insert(data))
    }

    fn run_load(&self) -> CashboardResult<DashboardData> {
        let records = self.store.load()?;
        let (transactions, summary) = aggregate(&records, &self.locale)?;
        Ok(DashboardData {
            transactions,
            summary,
        })
    }

    /// Whether a load is in progress
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The most recently published state, if any load has succeeded
    pub fn data(&self) -> Option<&DashboardData> {
        self.data.as_ref()
    }

    /// The locale configuration in use
    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    /// Access the transaction store
    pub fn store(&self) -> &TransactionStore<S> {
        &self.store
    }

    /// Mutable access to the transaction store
    pub fn store_mut(&mut self) -> &mut TransactionStore<S> {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CashboardError, CashboardResult};
    use crate::models::{Category, Money, TransactionKind, TransactionRecord};
    use crate::storage::{MemoryStore, TRANSACTIONS_KEY};
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record(title: &str, amount: &str, kind: TransactionKind) -> TransactionRecord {
        TransactionRecord::new(
            title,
            Money::parse_stored(amount).unwrap(),
            kind,
            Category::new("Vendas", "dollar-sign"),
            NaiveDate::from_ymd_opt(2020, 4, 13).unwrap(),
        )
    }

    #[test]
    fn test_load_empty_store() {
        let mut dashboard = Dashboard::new(MemoryStore::new(), LocaleConfig::pt_br());

        let data = dashboard.load().unwrap();
        assert!(data.transactions.is_empty());
        assert_eq!(data.summary.total, "R$ 0,00");
        assert!(!dashboard.is_loading());
    }

    #[test]
    fn test_load_publishes_aggregated_state() {
        let mut dashboard = Dashboard::new(MemoryStore::new(), LocaleConfig::pt_br());
        dashboard
            .store_mut()
            .append(record("Salário", "5000.00", TransactionKind::Positive))
            .unwrap();
        dashboard
            .store_mut()
            .append(record("Mercado", "350.00", TransactionKind::Negative))
            .unwrap();

        dashboard.load().unwrap();

        let data = dashboard.data().unwrap();
        assert_eq!(data.transactions.len(), 2);
        assert_eq!(data.summary.entries, "R$ 5.000,00");
        assert_eq!(data.summary.expenses, "R$ 350,00");
        assert_eq!(data.summary.total, "R$ 4.650,00");
    }

    #[test]
    fn test_failed_load_clears_flag_and_keeps_previous_data() {
        let backend = MemoryStore::new();
        let mut dashboard = Dashboard::new(backend, LocaleConfig::pt_br());
        dashboard
            .store_mut()
            .append(record("Salário", "5000.00", TransactionKind::Positive))
            .unwrap();
        dashboard.load().unwrap();
        let before = dashboard.data().cloned();

        // Corrupt the payload behind the dashboard's back
        dashboard
            .store_mut()
            .backend_mut()
            .set(TRANSACTIONS_KEY, "{broken")
            .unwrap();

        let err = dashboard.load().unwrap_err();
        assert!(err.is_decode());
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.data(), before.as_ref());
    }

    #[test]
    fn test_store_error_is_surfaced() {
        struct FailingStore;

        impl KeyValueStore for FailingStore {
            fn get(&self, _key: &str) -> CashboardResult<Option<String>> {
                Err(CashboardError::Store("backend offline".into()))
            }

            fn set(&mut self, _key: &str, _value: &str) -> CashboardResult<()> {
                Err(CashboardError::Store("backend offline".into()))
            }

            fn remove(&mut self, _key: &str) -> CashboardResult<()> {
                Err(CashboardError::Store("backend offline".into()))
            }
        }

        let mut dashboard = Dashboard::new(FailingStore, LocaleConfig::pt_br());
        let err = dashboard.load().unwrap_err();
        assert!(err.is_store());
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.data(), None);
    }

    #[test]
    fn test_reload_on_focus() {
        let dashboard = Rc::new(RefCell::new(Dashboard::new(
            MemoryStore::new(),
            LocaleConfig::pt_br(),
        )));

        let mut notifier = FocusNotifier::new();
        {
            let dashboard = Rc::clone(&dashboard);
            notifier.subscribe(move || {
                dashboard.borrow_mut().load().unwrap();
            });
        }

        notifier.focus();
        assert_eq!(
            dashboard.borrow().data().unwrap().summary.total,
            "R$ 0,00"
        );

        dashboard
            .borrow_mut()
            .store_mut()
            .append(record("Freela", "800.00", TransactionKind::Positive))
            .unwrap();

        notifier.focus();
        assert_eq!(
            dashboard.borrow().data().unwrap().summary.total,
            "R$ 800,00"
        );
    }
}
