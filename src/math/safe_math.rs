//! Safe math utilities to prevent overflow/underflow
//!
//! All fixed-point amounts are u128. Anything headed for a transaction
//! argument must stay on these checked paths; only display-tier code is
//! allowed to drop into floats.

use crate::errors::{ClientError, Result};

/// Checked addition with custom error
#[inline]
pub fn checked_add(a: u128, b: u128) -> Result<u128> {
    a.checked_add(b).ok_or(ClientError::MathOverflow)
}

/// Checked subtraction with custom error
#[inline]
pub fn checked_sub(a: u128, b: u128) -> Result<u128> {
    a.checked_sub(b).ok_or(ClientError::MathUnderflow)
}

/// Checked multiplication with custom error
#[inline]
pub fn checked_mul(a: u128, b: u128) -> Result<u128> {
    a.checked_mul(b).ok_or(ClientError::MathOverflow)
}

/// Checked division with custom error
#[inline]
pub fn checked_div(a: u128, b: u128) -> Result<u128> {
    if b == 0 {
        return Err(ClientError::DivisionByZero);
    }
    Ok(a / b)
}

/// Saturating subtraction (returns 0 instead of underflow)
#[inline]
pub fn saturating_sub(a: u128, b: u128) -> u128 {
    a.saturating_sub(b)
}
