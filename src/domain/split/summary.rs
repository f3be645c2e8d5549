//! Plain-text summary of an allocation, suitable for pasting into a chat.

use serde::Deserialize;

use super::allocator::Allocation;

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Prefix,
    #[default]
    Suffix,
}

/// Formatting rules for whole-unit currency amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    /// Inserted between groups of three digits.
    pub group_separator: String,
    pub position: SymbolPosition,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₽".to_string(),
            group_separator: "\u{a0}".to_string(),
            position: SymbolPosition::Suffix,
        }
    }
}

impl CurrencyFormat {
    /// Formats a whole-unit amount with digit grouping and the symbol.
    pub fn format(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.group_separator);
            }
            grouped.push(ch);
        }

        let sign = if amount < 0 { "-" } else { "" };
        match self.position {
            SymbolPosition::Prefix => format!("{}{}{}", sign, self.symbol, grouped),
            SymbolPosition::Suffix => format!("{}{}\u{a0}{}", sign, grouped, self.symbol),
        }
    }
}

/// Renders the allocation as a multi-line summary.
///
/// ```text
/// Total: 1 000 ₽
/// Mode: By distance
/// Alice: share 38.46%, pays 385 ₽
/// Bob: share 61.54%, pays 615 ₽
/// Sum: 1 000 ₽
/// ```
pub fn render_summary(allocation: &Allocation, currency: &CurrencyFormat) -> String {
    let mut lines = Vec::with_capacity(allocation.results.len() + 3);
    lines.push(format!("Total: {}", currency.format(allocation.total)));
    lines.push(format!("Mode: {}", allocation.mode.label()));
    for result in &allocation.results {
        lines.push(format!(
            "{}: share {}, pays {}",
            result.name,
            result.share,
            currency.format(result.pay)
        ));
    }
    lines.push(format!("Sum: {}", currency.format(allocation.sum_pay)));
    lines.join("\n")
}
