use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::CurrencyCode;

/// Where the minus sign goes relative to the currency symbol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignPlacement {
    /// `R$ -9.876,54`
    #[default]
    AfterSymbol,
    /// `-€9.876,54`
    BeforeSymbol,
}

/// Display conventions for one currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormatRule {
    pub symbol: String,
    /// Emit a single space between the symbol and the amount.
    pub symbol_spacing: bool,
    /// `None` renders the whole part without grouping.
    pub grouping_separator: Option<char>,
    pub decimal_separator: char,
    pub sign_placement: SignPlacement,
}

impl FormatRule {
    /// Brazilian Real: `R$ 1.234,56`.
    pub fn brl() -> Self {
        Self {
            symbol: "R$".into(),
            symbol_spacing: true,
            grouping_separator: Some('.'),
            decimal_separator: ',',
            sign_placement: SignPlacement::AfterSymbol,
        }
    }

    /// Generic fallback: `$1234.56`, no grouping.
    pub fn fallback() -> Self {
        Self {
            symbol: "$".into(),
            symbol_spacing: false,
            grouping_separator: None,
            decimal_separator: '.',
            sign_placement: SignPlacement::AfterSymbol,
        }
    }

    pub(crate) fn prefix(&self) -> String {
        if self.symbol_spacing {
            format!("{} ", self.symbol)
        } else {
            self.symbol.clone()
        }
    }
}

impl Default for FormatRule {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Currency code to [`FormatRule`] mapping with a catch-all default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<CurrencyCode, FormatRule>,
    default: FormatRule,
}

impl RuleTable {
    /// An empty table where every code uses `default`.
    pub fn new(default: FormatRule) -> Self {
        Self {
            rules: BTreeMap::new(),
            default,
        }
    }

    /// The storefront table: BRL has its own rule, everything else falls back.
    pub fn builtin() -> Self {
        let mut table = Self::new(FormatRule::fallback());
        table.register("BRL", FormatRule::brl());
        table
    }

    /// Adds or replaces the rule for `code`, returning the previous one.
    pub fn register(
        &mut self,
        code: impl Into<CurrencyCode>,
        rule: FormatRule,
    ) -> Option<FormatRule> {
        self.rules.insert(code.into(), rule)
    }

    pub fn rule_for(&self, code: &CurrencyCode) -> &FormatRule {
        match self.rules.get(code) {
            Some(rule) => rule,
            None => {
                tracing::trace!(currency = %code, "no dedicated rule, using default");
                self.default_rule()
            }
        }
    }

    pub fn default_rule(&self) -> &FormatRule {
        &self.default
    }

    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.rules.keys()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
