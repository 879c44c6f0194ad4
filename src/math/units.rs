//! Fixed-point unit parsing and formatting
//!
//! User text → u128 at a token's native decimal scaling, and back. The
//! parser is forgiving the way a UI input must be: stray characters are
//! stripped, excess fractional digits are truncated (never rounded up),
//! negative or unparsable input degrades to a zero amount rather than an
//! error surfaced to the user.

use crate::errors::{ClientError, Result};
use super::safe_math::{checked_add, checked_mul};
use super::wad::pow10;

/// Parse a decimal string into a fixed-point integer at `decimals`
///
/// Returns 0 for empty, negative, or fully unparsable input. Errors only
/// when the value genuinely does not fit in u128.
pub fn parse_units(text: &str, decimals: u8) -> Result<u128> {
    let trimmed = text.trim();

    // Negative input is a no-op amount, not an error
    if trimmed.starts_with('-') {
        return Ok(0);
    }

    let clean: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if clean.is_empty() || clean == "." {
        return Ok(0);
    }

    let mut parts = clean.splitn(2, '.');
    let int_part = parts.next().unwrap_or("0");
    // Anything after a second decimal point is dropped
    let frac_part = parts
        .next()
        .unwrap_or("")
        .split('.')
        .next()
        .unwrap_or("");

    let scale = decimals as usize;
    let mut frac: String = frac_part.chars().take(scale).collect();
    while frac.len() < scale {
        frac.push('0');
    }

    let int_value = if int_part.is_empty() {
        0
    } else {
        int_part
            .parse::<u128>()
            .map_err(|_| ClientError::InvalidAmount)?
    };
    let frac_value = if frac.is_empty() {
        0
    } else {
        frac.parse::<u128>()
            .map_err(|_| ClientError::InvalidAmount)?
    };

    checked_add(checked_mul(int_value, pow10(decimals)?)?, frac_value)
}

/// Render a fixed-point integer as an exact decimal string,
/// trimming trailing fractional zeros
pub fn format_units(amount: u128, decimals: u8) -> String {
    let Ok(scale) = pow10(decimals) else {
        return amount.to_string();
    };
    if scale == 1 {
        return amount.to_string();
    }

    let int = amount / scale;
    let frac = amount % scale;
    if frac == 0 {
        return int.to_string();
    }

    let mut frac_str = format!("{frac:0width$}", width = decimals as usize);
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{int}.{frac_str}")
}

/// Display-tier float view of a fixed-point amount
///
/// Precision loss is acceptable here: everything downstream of this is
/// advisory (ratios, USD valuations), never a transaction argument.
pub fn to_display(amount: u128, decimals: u8) -> f64 {
    amount as f64 / 10f64.powi(decimals as i32)
}

/// Parse user text as a strictly positive display-tier amount
pub fn parse_positive_amount(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}
