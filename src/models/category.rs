//! Category model
//!
//! Each transaction record embeds its category (name plus icon key). A fixed
//! catalog of known categories is provided for record creation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A transaction category as embedded in each record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name (e.g., "Alimentação")
    pub name: String,

    /// Icon key for the rendering layer (e.g., "coffee")
    pub icon: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An entry in the fixed category catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable key used to select the category (e.g., "food")
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Icon key
    pub icon: &'static str,
}

impl CatalogEntry {
    /// Build the embeddable category for this entry
    pub fn to_category(&self) -> Category {
        Category::new(self.name, self.icon)
    }
}

/// The fixed catalog of categories offered when creating a record
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "purchases",
        name: "Compras",
        icon: "shopping-bag",
    },
    CatalogEntry {
        key: "food",
        name: "Alimentação",
        icon: "coffee",
    },
    CatalogEntry {
        key: "salary",
        name: "Salário",
        icon: "dollar-sign",
    },
    CatalogEntry {
        key: "car",
        name: "Carro",
        icon: "crosshair",
    },
    CatalogEntry {
        key: "leisure",
        name: "Lazer",
        icon: "heart",
    },
    CatalogEntry {
        key: "studies",
        name: "Estudos",
        icon: "book",
    },
];

/// Look up a catalog entry by its key
pub fn find_category(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let cat = Category::new("Vendas", "dollar-sign");
        assert_eq!(cat.name, "Vendas");
        assert_eq!(cat.icon, "dollar-sign");
        assert_eq!(format!("{}", cat), "Vendas");
    }

    #[test]
    fn test_catalog_lookup() {
        let entry = find_category("food").unwrap();
        assert_eq!(entry.name, "Alimentação");
        assert_eq!(entry.icon, "coffee");

        assert!(find_category("unknown").is_none());
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_entry_to_category() {
        let cat = find_category("salary").unwrap().to_category();
        assert_eq!(cat, Category::new("Salário", "dollar-sign"));
    }

    #[test]
    fn test_serialization() {
        let cat = Category::new("Casa", "shopping-bag");
        let json = serde_json::to_string(&cat).unwrap();
        assert_eq!(json, r#"{"name":"Casa","icon":"shopping-bag"}"#);

        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(cat, deserialized);
    }
}
