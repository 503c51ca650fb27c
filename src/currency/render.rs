use once_cell::sync::Lazy;

use super::{Money, RuleTable, SignPlacement};
use crate::errors::FormatError;

/// Nanos in one whole unit.
pub const NANOS_PER_UNIT: i64 = 1_000_000_000;
/// Nanos in one hundredth of a unit.
pub const NANOS_PER_CENT: u32 = 10_000_000;

static BUILTIN: Lazy<MoneyFormatter> = Lazy::new(MoneyFormatter::default);

/// Renders `money` with the built-in rule table.
///
/// Never fails and never panics, including for amounts that break the
/// `units`/`nanos` sign invariant.
pub fn render(money: &Money) -> String {
    BUILTIN.render(money)
}

/// Checks the `Money` invariants: `|nanos| < 1e9` and matching signs.
pub fn validate(money: &Money) -> Result<(), FormatError> {
    if i64::from(money.nanos).abs() >= NANOS_PER_UNIT {
        return Err(FormatError::InvalidAmount(format!(
            "nanos {} outside ±999,999,999",
            money.nanos
        )));
    }
    if (money.units > 0 && money.nanos < 0) || (money.units < 0 && money.nanos > 0) {
        return Err(FormatError::InvalidAmount(format!(
            "units {} and nanos {} disagree in sign",
            money.units, money.nanos
        )));
    }
    Ok(())
}

/// Inserts `separator` between every group of three digits, counting from the right.
pub fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + (len / 3) * separator.len_utf8());
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Table-driven money formatter.
#[derive(Debug, Clone, Default)]
pub struct MoneyFormatter {
    rules: RuleTable,
    strict: bool,
}

impl MoneyFormatter {
    pub fn new(rules: RuleTable) -> Self {
        Self {
            rules,
            strict: false,
        }
    }

    /// Makes [`MoneyFormatter::try_render`] reject amounts that fail [`validate`].
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn render(&self, money: &Money) -> String {
        let rule = self.rules.rule_for(&money.currency_code);

        let whole = money.units.unsigned_abs().to_string();
        let whole = match rule.grouping_separator {
            Some(separator) => group_digits(&whole, separator),
            None => whole,
        };
        // Hundredths are truncated, never rounded.
        let cents = money.nanos.unsigned_abs() / NANOS_PER_CENT;
        let sign = if money.is_negative() { "-" } else { "" };
        let prefix = rule.prefix();
        let decimal = rule.decimal_separator;

        match rule.sign_placement {
            SignPlacement::AfterSymbol => format!("{prefix}{sign}{whole}{decimal}{cents:02}"),
            SignPlacement::BeforeSymbol => format!("{sign}{prefix}{whole}{decimal}{cents:02}"),
        }
    }

    /// Like [`MoneyFormatter::render`], but validates first in strict mode.
    pub fn try_render(&self, money: &Money) -> Result<String, FormatError> {
        if self.strict {
            if let Err(err) = validate(money) {
                tracing::warn!(
                    currency = %money.currency_code,
                    units = money.units,
                    nanos = money.nanos,
                    "rejected malformed amount: {err}"
                );
                return Err(err);
            }
        }
        Ok(self.render(money))
    }
}
