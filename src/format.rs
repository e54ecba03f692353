//! Display formatting shared by the reports and the CLI.
//!
//! Every user-visible rendering of an amount or a date goes through this
//! module, so the output formats cannot drift apart and nothing else
//! depends on the system locale.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Currency symbol used wherever amounts carry one.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats an amount with exactly two decimal places and no symbol.
pub fn amount(value: Decimal) -> String {
    format!("{:.2}", value)
}

/// Formats an amount prefixed with the currency symbol.
pub fn currency(value: Decimal) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, value)
}

/// Formats a calendar date for report output.
pub fn date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}
