//! Locale-aware display formatting
//!
//! Converts exact centavo amounts and parsed dates into the strings the view
//! layer renders. All functions take the [`LocaleConfig`] explicitly.

use chrono::{Datelike, NaiveDate};

use crate::config::LocaleConfig;
use crate::models::Money;

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format an amount as a locale currency string
///
/// `Money::from_cents(1_200_000)` formats as `"R$ 12.000,00"` under pt-BR
/// and `"$12,000.00"` under en-US. Negative amounts carry a leading minus
/// before the symbol.
pub fn currency(amount: Money, locale: &LocaleConfig) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.abs();
    let space = if locale.symbol_spaced() { " " } else { "" };

    format!(
        "{}{}{}{}{}{:02}",
        sign,
        locale.symbol(),
        space,
        group_units(abs.units(), locale.group_sep()),
        locale.decimal_sep(),
        abs.cents_part()
    )
}

/// Format a date as the locale short form, `DD/MM/YY`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}

/// Format a date as a day-and-month caption ("13 de abril" / "April 13")
pub fn day_month(date: NaiveDate, locale: &LocaleConfig) -> String {
    let month = month_name(date.month(), locale);
    if locale.locale() == "pt-BR" {
        format!("{} de {}", date.day(), month)
    } else {
        format!("{} {}", month, date.day())
    }
}

/// Format the covered-period caption for the total highlight
/// ("01 a 16 de abril" / "01 to April 16")
pub fn period_caption(latest: NaiveDate, locale: &LocaleConfig) -> String {
    let connector = if locale.locale() == "pt-BR" { "a" } else { "to" };
    format!("01 {} {}", connector, day_month(latest, locale))
}

fn month_name(month: u32, locale: &LocaleConfig) -> &'static str {
    let table = if locale.locale() == "pt-BR" {
        &MONTHS_PT
    } else {
        &MONTHS_EN
    };
    table[(month - 1) as usize]
}

/// Insert the grouping separator every three digits of the integer part
fn group_units(units: i64, sep: char) -> String {
    let digits = units.to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(&sep.to_string())
}
