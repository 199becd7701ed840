//! Currency amount parsing and display

use crate::error::{MinibankError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Format an amount with the currency symbol and two decimal places,
/// e.g. "$500000.00".
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Parse a user-supplied amount string, truncating to two decimal places.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw.trim())
        .map(|amount| amount.round_dp_with_strategy(2, RoundingStrategy::ToZero))
        .map_err(|_| MinibankError::InvalidAmount(raw.to_string()))
}
