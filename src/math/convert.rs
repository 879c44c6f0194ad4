//! Decimal-scaling conversion into debt-token units
//!
//! The stability pool and the borrower operations accept figures in the
//! debt token's 18-decimal unit. Collateral-side tokens carry their own
//! precision (USDC is 6, WBTC is 8), so amounts are rescaled through a
//! WAD price before any preview or submission:
//!
//! ```text
//! result = amount * price / 10^decimals_in
//! ```
//!
//! Pure integer math, floored. The fixed-point representation is never
//! dropped before submission.

use super::units::parse_units;
use super::wad::{mul_div_down, pow10};
use crate::errors::Result;

/// Rescale `amount` (fixed-point at `decimals_in`) into debt-token units
/// through a WAD-scaled price
pub fn scale_to_debt_units(amount: u128, price_wad: u128, decimals_in: u8) -> Result<u128> {
    mul_div_down(amount, price_wad, pow10(decimals_in)?)
}

/// Front door for user text: parse at the source token's decimals, then
/// rescale. Unavailable (`None`) when the price is absent, the text does
/// not parse, or the amount is not positive.
pub fn debt_units_from_text(text: &str, price_wad: Option<u128>, decimals_in: u8) -> Option<u128> {
    let price = price_wad?;
    let amount = parse_units(text, decimals_in).ok()?;
    if amount == 0 {
        return None;
    }
    scale_to_debt_units(amount, price, decimals_in).ok()
}
