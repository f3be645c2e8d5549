//! Display configuration (currency formatting for text summaries)

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::split::{CurrencyFormat, SymbolPosition};

/// Display configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol appended or prepended to amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Separator between groups of three digits
    #[serde(default = "default_group_separator")]
    pub group_separator: String,

    /// Symbol placement
    #[serde(default)]
    pub symbol_position: SymbolPosition,
}

impl DisplayConfig {
    /// Build the currency format used by summaries
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat {
            symbol: self.currency_symbol.clone(),
            group_separator: self.group_separator.clone(),
            position: self.symbol_position,
        }
    }

    /// Validate display configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ValidationError::BlankCurrencySymbol);
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            group_separator: default_group_separator(),
            symbol_position: SymbolPosition::default(),
        }
    }
}

fn default_currency_symbol() -> String {
    "₽".to_string()
}

fn default_group_separator() -> String {
    "\u{a0}".to_string()
}
