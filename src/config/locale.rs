//! Locale and currency configuration
//!
//! The locale/currency pair is an explicit value passed into the formatting
//! step rather than a hidden global, so tests and embedders can vary it.

use serde::{Deserialize, Serialize};

use crate::error::{CashboardError, CashboardResult};

/// Formatting configuration for one locale/currency pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// BCP 47 locale tag (e.g., "pt-BR")
    locale: String,

    /// ISO 4217 currency code (e.g., "BRL")
    currency: String,

    /// Currency symbol placed before the number
    symbol: String,

    /// Whether a space separates the symbol from the number
    symbol_spaced: bool,

    /// Decimal separator
    decimal_sep: char,

    /// Thousands grouping separator
    group_sep: char,
}

impl LocaleConfig {
    /// Brazilian Portuguese with BRL: `R$ 12.000,00`
    pub fn pt_br() -> Self {
        Self {
            locale: "pt-BR".to_string(),
            currency: "BRL".to_string(),
            symbol: "R$".to_string(),
            symbol_spaced: true,
            decimal_sep: ',',
            group_sep: '.',
        }
    }

    /// US English with USD: `$12,000.00`
    pub fn en_us() -> Self {
        Self {
            locale: "en-US".to_string(),
            currency: "USD".to_string(),
            symbol: "$".to_string(),
            symbol_spaced: false,
            decimal_sep: '.',
            group_sep: ',',
        }
    }

    /// Resolve a built-in preset from its locale tag
    pub fn for_tag(tag: &str) -> CashboardResult<Self> {
        match tag {
            "pt-BR" => Ok(Self::pt_br()),
            "en-US" => Ok(Self::en_us()),
            other => Err(CashboardError::Config(format!(
                "Unknown locale tag: {}",
                other
            ))),
        }
    }

    /// Build a fully custom configuration
    pub fn custom(
        locale: impl Into<String>,
        currency: impl Into<String>,
        symbol: impl Into<String>,
        symbol_spaced: bool,
        decimal_sep: char,
        group_sep: char,
    ) -> Self {
        Self {
            locale: locale.into(),
            currency: currency.into(),
            symbol: symbol.into(),
            symbol_spaced,
            decimal_sep,
            group_sep,
        }
    }

    /// The BCP 47 locale tag
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The ISO 4217 currency code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The currency symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether the symbol is separated from the number by a space
    pub fn symbol_spaced(&self) -> bool {
        self.symbol_spaced
    }

    /// The decimal separator
    pub fn decimal_sep(&self) -> char {
        self.decimal_sep
    }

    /// The thousands grouping separator
    pub fn group_sep(&self) -> char {
        self.group_sep
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::pt_br()
    }
}
