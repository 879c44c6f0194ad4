//! Den position view and closing-position detection
//!
//! A den is a view over `(collateral, debt)` fetched per (user, den
//! manager) pair. It exists only while either side is non-zero; a closed
//! den is the absence of a position, not a flagged state.
//!
//! Fully closing a den goes through `closeDen` instead of `adjustDen`,
//! so a pending withdrawal or repayment must be classified before the
//! call is prepared.

use crate::constants::{CLOSE_TOLERANCE, DEBT_TOKEN_DECIMALS};
use crate::math::units::{parse_positive_amount, to_display};
use crate::math::safe_math::saturating_sub;

/// User position against one den manager
///
/// Collateral is fixed-point at the collateral token's decimals; debt is
/// fixed-point at the debt token's 18 decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DenPosition {
    pub collateral: u128,
    pub debt: u128,
}

impl DenPosition {
    /// A den exists while it holds any collateral or debt
    pub fn exists(&self) -> bool {
        self.collateral > 0 || self.debt > 0
    }

    pub fn has_debt(&self) -> bool {
        self.debt > 0
    }

    pub fn has_collateral(&self) -> bool {
        self.collateral > 0
    }
}

/// Whether a pending adjustment fully closes the den
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustKind {
    Partial,
    Closing,
}

/// The shared closing rule: within the fixed tolerance of the maximum
/// (strict `<`), or at/above it
fn is_closing_amount(requested: f64, max: f64) -> bool {
    (requested - max).abs() < CLOSE_TOLERANCE || requested >= max
}

/// Exact repayment that empties a den, given the protocol's gas
/// compensation (the debt floor retained for liquidation incentives)
pub fn required_repayment_to_close(debt: u128, gas_compensation: u128) -> u128 {
    saturating_sub(debt, gas_compensation)
}

/// Classify a pending collateral withdrawal
pub fn classify_withdrawal(
    position: &DenPosition,
    collateral_decimals: u8,
    amount_text: &str,
) -> AdjustKind {
    if !position.has_collateral() {
        return AdjustKind::Partial;
    }
    let Some(requested) = parse_positive_amount(amount_text) else {
        return AdjustKind::Partial;
    };
    let max = to_display(position.collateral, collateral_decimals);
    if is_closing_amount(requested, max) {
        AdjustKind::Closing
    } else {
        AdjustKind::Partial
    }
}

/// Classify a pending debt repayment
///
/// When the gas compensation figure has not loaded, detection degrades
/// to the coarser "repaying at least the whole debt" rule rather than
/// blocking the action.
pub fn classify_repayment(
    position: &DenPosition,
    amount_text: &str,
    gas_compensation: Option<u128>,
) -> AdjustKind {
    if !position.has_debt() {
        return AdjustKind::Partial;
    }
    let Some(requested) = parse_positive_amount(amount_text) else {
        return AdjustKind::Partial;
    };

    let total_debt = to_display(position.debt, DEBT_TOKEN_DECIMALS);
    if requested >= total_debt {
        return AdjustKind::Closing;
    }

    let Some(gas_comp) = gas_compensation else {
        return AdjustKind::Partial;
    };
    let required = to_display(
        required_repayment_to_close(position.debt, gas_comp),
        DEBT_TOKEN_DECIMALS,
    );
    if is_closing_amount(requested, required) {
        AdjustKind::Closing
    } else {
        AdjustKind::Partial
    }
}
