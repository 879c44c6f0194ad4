//! Mint amount / loan-to-value form state
//!
//! One control is a bounded percentage slider (0–1000% LTV), the other a
//! free-text debt amount; editing either must keep the two consistent.
//! Rather than cross-writing listeners guarded by "is updating" flags,
//! the form keeps the most recent edit as the single authoritative value
//! and computes the other side as a projection on read. There is no
//! write cycle to break: a setter only records its own value.
//!
//! Projections use display-tier rounding (2 decimal places, half-up),
//! deliberately split from the truncating fixed-point math used for
//! settlement amounts.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_DECIMALS, MAX_LTV_PERCENT};
use crate::math::units::parse_positive_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edited {
    Ltv,
    Amount,
}

/// Form state for minting debt against a collateral valuation
#[derive(Debug, Clone)]
pub struct MintForm {
    /// Last value the slider held (also the fallback while the amount
    /// side cannot be projected)
    ltv: u16,
    /// Last text the amount field held
    amount: String,
    edited: Edited,
}

impl Default for MintForm {
    fn default() -> Self {
        MintForm {
            ltv: 50,
            amount: String::new(),
            edited: Edited::Ltv,
        }
    }
}

impl MintForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slider edit; clamps to the 0–1000% bound
    pub fn set_ltv_percent(&mut self, percent: u16) {
        self.ltv = percent.min(MAX_LTV_PERCENT);
        self.edited = Edited::Ltv;
    }

    /// Amount-field edit; kept verbatim, projection happens on read
    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount = text.into();
        self.edited = Edited::Amount;
    }

    /// The debt amount to mint, as field text
    ///
    /// When the slider owns the form, this is `collateral_usd × ltv /
    /// 100` at display precision, or empty while no collateral
    /// valuation exists, since no meaningful mint amount can be derived
    /// without one. A user-typed amount is never cleared from under
    /// them.
    pub fn mint_amount(&self, collateral_usd: Option<f64>) -> String {
        match self.edited {
            Edited::Amount => self.amount.clone(),
            Edited::Ltv => match collateral_usd {
                Some(usd) if usd > 0.0 => {
                    format_display(usd * self.ltv as f64 / 100.0).unwrap_or_default()
                }
                _ => String::new(),
            },
        }
    }

    /// The loan-to-value slider position
    ///
    /// When the amount field owns the form, this is `amount /
    /// collateral_usd × 100` rounded to the nearest integer and clamped;
    /// with no usable amount or valuation, the slider keeps its last
    /// position.
    pub fn ltv_percent(&self, collateral_usd: Option<f64>) -> u16 {
        match self.edited {
            Edited::Ltv => self.ltv,
            Edited::Amount => {
                let amount = parse_positive_amount(&self.amount);
                match (amount, collateral_usd) {
                    (Some(amount), Some(usd)) if usd > 0.0 => {
                        let percent = (amount / usd * 100.0).round();
                        percent.clamp(0.0, MAX_LTV_PERCENT as f64) as u16
                    }
                    _ => self.ltv,
                }
            }
        }
    }
}

/// Round-half-up to display precision, trailing zeros kept (`8000.00`)
fn format_display(value: f64) -> Option<String> {
    let decimal = Decimal::from_f64_retain(value)?;
    let mut rounded = decimal
        .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_DECIMALS);
    Some(rounded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slider_drives_amount() {
        let mut form = MintForm::new();
        form.set_ltv_percent(40);
        assert_eq!(form.mint_amount(Some(10_000.0)), "4000.00");
        assert_eq!(form.ltv_percent(Some(10_000.0)), 40);
    }

    #[test]
    fn test_amount_drives_slider() {
        let mut form = MintForm::new();
        form.set_amount("4000");
        assert_eq!(form.ltv_percent(Some(10_000.0)), 40);
        assert_eq!(form.mint_amount(Some(10_000.0)), "4000");
    }

    #[test]
    fn test_slider_clamps() {
        let mut form = MintForm::new();
        form.set_ltv_percent(1500);
        assert_eq!(form.ltv_percent(Some(100.0)), 1000);

        // an outsized amount clamps the projection too
        form.set_amount("999999");
        assert_eq!(form.ltv_percent(Some(100.0)), 1000);
    }

    #[test]
    fn test_amount_cleared_without_collateral_value() {
        let mut form = MintForm::new();
        form.set_ltv_percent(40);
        assert_eq!(form.mint_amount(None), "");
        assert_eq!(form.mint_amount(Some(0.0)), "");

        // but a user-typed amount stays put
        form.set_amount("123.45");
        assert_eq!(form.mint_amount(None), "123.45");
    }

    #[test]
    fn test_slider_holds_position_without_collateral_value() {
        let mut form = MintForm::new();
        form.set_ltv_percent(70);
        form.set_amount("4000");
        // no valuation to derive from → last slider position stands
        assert_eq!(form.ltv_percent(None), 70);
        assert_eq!(form.ltv_percent(Some(0.0)), 70);
    }

    #[test]
    fn test_round_trip_amount_first() {
        let mut form = MintForm::new();
        let usd = Some(10_000.0);

        form.set_amount("4000");
        let percent = form.ltv_percent(usd);
        form.set_ltv_percent(percent);
        assert_eq!(form.mint_amount(usd), "4000.00");
    }

    #[test]
    fn test_display_rounding_is_half_up() {
        // exact midpoints (representable in binary) round away from zero
        assert_eq!(format_display(0.125).as_deref(), Some("0.13"));
        assert_eq!(format_display(0.375).as_deref(), Some("0.38"));
        assert_eq!(format_display(8000.0).as_deref(), Some("8000.00"));
    }

    proptest! {
        /// Slider → amount → slider reproduces the position within one
        /// integer percent of rounding slack.
        #[test]
        fn round_trip_slider_first(
            percent in 0u16..=1000,
            usd in 1.0f64..100_000.0,
        ) {
            let mut form = MintForm::new();
            form.set_ltv_percent(percent);
            let projected = form.mint_amount(Some(usd));
            form.set_amount(projected);
            let back = form.ltv_percent(Some(usd)) as i32;
            prop_assert!((back - percent as i32).abs() <= 1);
        }
    }
}
