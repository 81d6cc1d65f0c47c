//! Path management for cashboard
//!
//! Provides XDG-compliant path resolution for the on-disk store.
//!
//! ## Path Resolution Order
//!
//! 1. `CASHBOARD_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cashboard` or `~/.config/cashboard`
//! 3. Windows: `%APPDATA%\cashboard`

use std::path::PathBuf;

use crate::error::CashboardError;

/// Manages all paths used by cashboard
#[derive(Debug, Clone)]
pub struct CashboardPaths {
    /// Base directory for all cashboard data
    base_dir: PathBuf,
}

impl CashboardPaths {
    /// Create a new CashboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CashboardError> {
        let base_dir = if let Ok(custom) = std::env::var("CASHBOARD_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CashboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/cashboard/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the key-value store file
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("store.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CashboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashboardError::Store(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CashboardError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| CashboardError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("cashboard"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CashboardError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CashboardError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("cashboard"))
}
