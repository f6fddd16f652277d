//! Decimal token amounts.
//!
//! Stellar asset contracts use 7 decimal places, so `"1"` is `10_000_000`
//! base units and `"0.001"` is `10_000`.

use crate::errors::{DeployError, Result};

pub const TOKEN_DECIMALS: u32 = 7;

/// Parse a non-negative decimal string into base units.
pub fn parse_units(text: &str, decimals: u32) -> Result<i128> {
    let text = text.trim();
    let invalid = || DeployError::Amount(format!("'{text}' is not a decimal amount"));

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if fraction.len() > decimals as usize {
        return Err(DeployError::Amount(format!(
            "'{text}' has more than {decimals} decimal places"
        )));
    }

    let scale = 10i128.pow(decimals);
    let whole: i128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let fraction: i128 = if fraction.is_empty() {
        0
    } else {
        let padded = format!("{fraction:0<width$}", width = decimals as usize);
        padded.parse().map_err(|_| invalid())?
    };

    whole
        .checked_mul(scale)
        .and_then(|units| units.checked_add(fraction))
        .ok_or_else(|| DeployError::Amount(format!("'{text}' overflows")))
}

/// Render base units as a decimal string without trailing zeros.
pub fn format_units(value: i128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    let whole = magnitude / scale;
    let fraction = magnitude % scale;

    if fraction == 0 {
        return format!("{sign}{whole}");
    }
    let fraction = format!("{fraction:0>width$}", width = decimals as usize);
    format!("{sign}{whole}.{}", fraction.trim_end_matches('0'))
}
