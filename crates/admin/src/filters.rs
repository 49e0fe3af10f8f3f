//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;
use std::str::FromStr;

use farah_core::format_amount;
use rust_decimal::Decimal;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats an amount in shekels, dropping trailing zeros.
///
/// Usage in templates: `{{ order.total|shekels }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn shekels(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    Ok(Decimal::from_str(raw.trim()).map_or_else(
        |_| format!("{raw} ₪"),
        |amount| format!("{} ₪", format_amount(amount)),
    ))
}
