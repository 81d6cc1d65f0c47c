//! Configuration for cashboard
//!
//! Locale/currency formatting configuration and on-disk path resolution.

pub mod locale;
pub mod paths;

pub use locale::LocaleConfig;
pub use paths::CashboardPaths;
