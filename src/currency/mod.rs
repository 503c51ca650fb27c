//! Currency primitives and the table-driven money formatter.

mod render;
mod rules;

pub use render::{group_digits, render, validate, MoneyFormatter, NANOS_PER_CENT, NANOS_PER_UNIT};
pub use rules::{FormatRule, RuleTable, SignPlacement};

use std::fmt;

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

impl From<String> for CurrencyCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CurrencyCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A signed amount split into whole `units` and billionths (`nanos`).
///
/// Both parts are expected to carry the same sign. Nothing here enforces it;
/// see [`validate`] for the opt-in boundary check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub currency_code: CurrencyCode,
    #[serde(default)]
    pub units: i64,
    #[serde(default)]
    pub nanos: i32,
}

impl Money {
    pub fn new(currency_code: impl Into<CurrencyCode>, units: i64, nanos: i32) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// An amount is negative when either component is below zero.
    pub fn is_negative(&self) -> bool {
        self.units < 0 || self.nanos < 0
    }
}

/// Storefront logo for a currency code, used next to price headers.
///
/// Unknown codes fall back to `$`.
pub fn currency_logo(code: &str) -> &'static str {
    match code.trim().to_ascii_uppercase().as_str() {
        "USD" | "CAD" => "$",
        "JPY" => "¥",
        "EUR" => "€",
        "TRY" => "₺",
        "GBP" => "£",
        _ => "$",
    }
}
