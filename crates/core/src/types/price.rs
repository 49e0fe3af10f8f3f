//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices are whole or fractional shekels. Amounts are kept as
//! `Decimal` so cart totals never accumulate floating-point error.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (shekels, not agorot).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the store currency.
    #[must_use]
    pub const fn shekels(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::ILS)
    }

    /// Format for display, e.g. `25 ₪` or `12.5 ₪`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", format_amount(self.amount), self.currency_code.symbol())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Render an amount without trailing zeros (`25.00` → `25`).
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// ISO 4217 currency codes accepted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    ILS,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Currency symbol used on the storefront and invoices.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::ILS => "₪",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_drops_trailing_zeros() {
        assert_eq!(Price::shekels(Decimal::new(2500, 2)).display(), "25 ₪");
        assert_eq!(Price::shekels(Decimal::new(125, 1)).display(), "12.5 ₪");
        assert_eq!(Price::shekels(Decimal::ZERO).display(), "0 ₪");
    }

    #[test]
    fn test_currency_default_is_shekel() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::ILS);
        assert_eq!(CurrencyCode::USD.symbol(), "$");
    }
}
