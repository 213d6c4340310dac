//! Explicit parsing of user-entered numeric fields.
//!
//! The order form keeps raw text; these functions turn it into typed values
//! or a typed failure instead of silently coercing to zero.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::values::{Price, Quantity};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Value is empty")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' must be greater than zero")]
    NotPositive(String),

    #[error("'{0}' must not be negative")]
    Negative(String),

    #[error("Unknown order kind: {0}")]
    UnknownOrderKind(String),
}

/// Parse a whole, strictly positive share count
pub fn parse_quantity(input: &str) -> Result<Quantity, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value: i128 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value <= 0 {
        return Err(InputError::NotPositive(trimmed.to_string()));
    }

    Quantity::try_from(value).map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Parse a non-negative decimal price
pub fn parse_price(input: &str) -> Result<Price, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value =
        Decimal::from_str(trimmed).map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(InputError::Negative(trimmed.to_string()));
    }

    Ok(value)
}
