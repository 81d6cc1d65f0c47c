//! Transaction collection persistence
//!
//! Manages the JSON-encoded record collection stored under a fixed
//! namespaced key in any [`KeyValueStore`].

use crate::error::{CashboardError, CashboardResult};
use crate::models::TransactionRecord;

use super::kv::KeyValueStore;

/// The namespaced key holding the transaction collection
pub const TRANSACTIONS_KEY: &str = "@cashboard:transactions";

/// Repository for the persisted transaction collection
///
/// Wraps a key-value backend and owns the encoding of the record array.
/// Input order in the payload is the order handed to the aggregator.
#[derive(Debug, Clone)]
pub struct TransactionStore<S> {
    store: S,
}

impl<S: KeyValueStore> TransactionStore<S> {
    /// Create a repository over the given backend
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load all records
    ///
    /// Absence of the key is an empty collection, not an error. A payload
    /// that is not a JSON array of records fails with `Decode`.
    pub fn load(&self) -> CashboardResult<Vec<TransactionRecord>> {
        let payload = match self.store.get(TRANSACTIONS_KEY)? {
            Some(payload) => payload,
            None => return Ok(Vec::new()),
        };

        serde_json::from_str(&payload).map_err(|e| {
            CashboardError::Decode(format!("Invalid transaction payload: {}", e))
        })
    }

    /// Replace the stored collection
    pub fn save(&mut self, records: &[TransactionRecord]) -> CashboardResult<()> {
        let payload = serde_json::to_string(records)
            .map_err(|e| CashboardError::Decode(format!("Failed to encode records: {}", e)))?;
        self.store.set(TRANSACTIONS_KEY, &payload)
    }

    /// Append one record, preserving the existing order
    pub fn append(&mut self, record: TransactionRecord) -> CashboardResult<()> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    /// Drop the stored collection entirely
    pub fn clear(&mut self) -> CashboardResult<()> {
        self.store.remove(TRANSACTIONS_KEY)
    }

    /// Access the underlying backend
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying backend
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionKind};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

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
    fn test_absent_key_is_empty_collection() {
        let store = TransactionStore::new(MemoryStore::new());
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut store = TransactionStore::new(MemoryStore::new());
        let records = vec![
            record("Desenvolvimento de site", "12000.00", TransactionKind::Positive),
            record("Hamburgeria Pizzy", "59.00", TransactionKind::Negative),
        ];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = TransactionStore::new(MemoryStore::new());
        let first = record("first", "1.00", TransactionKind::Positive);
        let second = record("second", "2.00", TransactionKind::Negative);

        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![first, second]);
    }

    #[test]
    fn test_clear() {
        let mut store = TransactionStore::new(MemoryStore::new());
        store
            .append(record("x", "1.00", TransactionKind::Positive))
            .unwrap();

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), Vec::new());
        assert_eq!(store.backend().get(TRANSACTIONS_KEY).unwrap(), None);
    }

    #[test]
    fn test_non_json_payload_is_decode_error() {
        let backend = MemoryStore::with_entry(TRANSACTIONS_KEY, "not json");
        let store = TransactionStore::new(backend);

        let err = store.load().unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_wrong_shape_payload_is_decode_error() {
        let backend = MemoryStore::with_entry(TRANSACTIONS_KEY, r#"{"unexpected": true}"#);
        let store = TransactionStore::new(backend);

        assert!(store.load().unwrap_err().is_decode());
    }
}
