//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging clap
//! argument parsing with the storage and dashboard layers.

pub mod dashboard;
pub mod record;

pub use dashboard::{handle_list, handle_summary};
pub use record::{handle_add, handle_categories, handle_clear};
