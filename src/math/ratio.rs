//! Loan-to-value ratio calculations
//!
//! Display-tier math: debt and collateral drop to floats against an
//! external USD price, so these figures are advisory previews only. The
//! authoritative collateralization ratio lives in the den manager
//! contract.
//!
//! A ratio with a zero denominator is undefined, never zero and never
//! infinity: every function here returns `None` in that case.

use crate::constants::DEBT_TOKEN_DECIMALS;
use crate::errors::Result;
use crate::math::safe_math::checked_add;
use crate::math::units::to_display;
use crate::state::position::DenPosition;

/// Direction of a pending collateral adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollateralMode {
    Add,
    Remove,
}

/// Direction of a pending debt adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtMode {
    Mint,
    Repay,
}

/// USD valuation of a fixed-point collateral amount
pub fn collateral_usd(collateral: u128, decimals: u8, price_usd: f64) -> f64 {
    to_display(collateral, decimals) * price_usd
}

/// Current loan-to-value of an existing den, in percent
///
/// Undefined when the den does not exist, carries no debt, or its
/// collateral values to zero USD.
pub fn current_ltv(
    position: &DenPosition,
    collateral_decimals: u8,
    price_usd: Option<f64>,
) -> Option<f64> {
    let price = price_usd?;
    if !position.has_debt() {
        return None;
    }
    let coll_usd = collateral_usd(position.collateral, collateral_decimals, price);
    if coll_usd == 0.0 {
        return None;
    }
    Some(to_display(position.debt, DEBT_TOKEN_DECIMALS) / coll_usd * 100.0)
}

/// Projected loan-to-value after a pending collateral change
///
/// The projected collateral valuation clamps at zero; a fully drained
/// den has no defined ratio.
pub fn projected_ltv_after_collateral(
    position: &DenPosition,
    collateral_decimals: u8,
    price_usd: Option<f64>,
    pending_amount: f64,
    mode: CollateralMode,
) -> Option<f64> {
    let price = price_usd?;
    if !position.has_debt() {
        return None;
    }

    let existing_usd = collateral_usd(position.collateral, collateral_decimals, price);
    let pending_usd = pending_amount.max(0.0) * price;
    let projected_usd = match mode {
        CollateralMode::Add => existing_usd + pending_usd,
        CollateralMode::Remove => (existing_usd - pending_usd).max(0.0),
    };
    if projected_usd == 0.0 {
        return None;
    }
    Some(to_display(position.debt, DEBT_TOKEN_DECIMALS) / projected_usd * 100.0)
}

/// Projected loan-to-value after a pending debt change, collateral
/// unchanged. Undefined when the new debt is zero (the den is closing).
pub fn projected_ltv_after_debt(
    position: &DenPosition,
    collateral_decimals: u8,
    price_usd: Option<f64>,
    new_debt: u128,
) -> Option<f64> {
    let price = price_usd?;
    if !position.exists() || new_debt == 0 {
        return None;
    }
    let coll_usd = collateral_usd(position.collateral, collateral_decimals, price);
    if coll_usd == 0.0 {
        return None;
    }
    Some(to_display(new_debt, DEBT_TOKEN_DECIMALS) / coll_usd * 100.0)
}

/// New debt figure after a repay or mint, in debt-token units
///
/// Repaying more than the outstanding debt floors at zero; minting past
/// u128 is an overflow error.
pub fn debt_after_change(existing: u128, change: u128, mode: DebtMode) -> Result<u128> {
    match mode {
        DebtMode::Repay => Ok(existing.saturating_sub(change)),
        DebtMode::Mint => checked_add(existing, change),
    }
}
