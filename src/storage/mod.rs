//! Storage layer for cashboard
//!
//! A key-value abstraction with in-memory and file-backed implementations,
//! plus the repository for the persisted transaction collection.

pub mod file;
pub mod kv;
pub mod transactions;

pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use transactions::{TransactionStore, TRANSACTIONS_KEY};
