//! Fixed-point WAD (1e18) arithmetic operations
//!
//! All calculations use u128 with WAD scaling. Truncation (floor) on the
//! final division is the only rounding policy: amounts headed on-chain are
//! never rounded up by this client.

use crate::errors::{ClientError, Result};
use super::safe_math::{checked_div, checked_mul};

/// Multiply then divide, rounding DOWN
/// Order: (a * b) / c
///
/// # Arguments
/// * `a` - First multiplicand
/// * `b` - Second multiplicand
/// * `c` - Divisor (must be non-zero)
pub fn mul_div_down(a: u128, b: u128, c: u128) -> Result<u128> {
    if c == 0 {
        return Err(ClientError::DivisionByZero);
    }

    if a == 0 || b == 0 {
        return Ok(0);
    }

    checked_div(checked_mul(a, b)?, c)
}

/// 10^decimals as u128
///
/// Errors past 38 decimals, where the power no longer fits.
pub fn pow10(decimals: u8) -> Result<u128> {
    10u128
        .checked_pow(decimals as u32)
        .ok_or(ClientError::DecimalsOutOfRange(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WAD;
    use proptest::prelude::*;

    #[test]
    fn test_mul_div_down() {
        // 100 * 200 / 300 = 66.666... → 66
        assert_eq!(mul_div_down(100, 200, 300).unwrap(), 66);

        // Edge cases
        assert_eq!(mul_div_down(0, 100, 50).unwrap(), 0);
        assert_eq!(mul_div_down(100, 0, 50).unwrap(), 0);
        assert!(mul_div_down(100, 200, 0).is_err());
    }

    #[test]
    fn test_wad_scaling() {
        let half_wad = WAD / 2;

        // 0.5 * 1.0 / 1.0 = 0.5
        assert_eq!(mul_div_down(half_wad, WAD, WAD).unwrap(), half_wad);

        // 0.5 * 0.5 / 1.0 = 0.25
        assert_eq!(mul_div_down(half_wad, half_wad, WAD).unwrap(), WAD / 4);
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0).unwrap(), 1);
        assert_eq!(pow10(6).unwrap(), 1_000_000);
        assert_eq!(pow10(18).unwrap(), WAD);
        assert!(pow10(39).is_err());
    }

    proptest! {
        /// Floor division never exceeds the exact quotient and is
        /// monotonically non-decreasing in both multiplicands.
        #[test]
        fn mul_div_down_monotone(
            a in 0u128..=u64::MAX as u128,
            b in 0u128..=u64::MAX as u128,
            c in 1u128..=u64::MAX as u128,
        ) {
            let base = mul_div_down(a, b, c).unwrap();
            let bumped_a = mul_div_down(a + 1, b, c).unwrap();
            let bumped_b = mul_div_down(a, b + 1, c).unwrap();
            prop_assert!(bumped_a >= base);
            prop_assert!(bumped_b >= base);
        }
    }
}
