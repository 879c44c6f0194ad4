//! Debt repayment and further-mint flow
//!
//! The withdraw page adjusts the debt side of an existing den: repaying
//! (possibly closing the den) or minting more against the same
//! collateral. Closing classification degrades gracefully while the gas
//! compensation figure has not loaded.

use crate::config::{Address, ProtocolContracts, Token};
use crate::constants::DEBT_TOKEN_DECIMALS;
use crate::interfaces::calls::CallRequest;
use crate::math::ratio::{debt_after_change, projected_ltv_after_debt, DebtMode};
use crate::math::units::parse_units;
use crate::state::position::{classify_repayment, AdjustKind, DenPosition};

/// Prepare the borrower-operations call for a debt change
pub fn plan_debt_change(
    contracts: &ProtocolContracts,
    user: Address,
    token: &Token,
    position: &DenPosition,
    amount_text: &str,
    mode: DebtMode,
    gas_compensation: Option<u128>,
) -> Option<CallRequest> {
    let borrower_operations = contracts.borrower_operations?;
    let den_manager = token.den_manager?;
    if !position.exists() {
        return None;
    }

    let change = parse_units(amount_text, DEBT_TOKEN_DECIMALS).ok()?;
    if change == 0 {
        return None;
    }

    match mode {
        DebtMode::Repay => match classify_repayment(position, amount_text, gas_compensation) {
            AdjustKind::Closing => Some(CallRequest::close_den(
                borrower_operations,
                den_manager,
                user,
            )),
            AdjustKind::Partial => Some(CallRequest::adjust_den(
                borrower_operations,
                den_manager,
                user,
                0,
                0,
                change,
                false,
                0,
            )),
        },
        DebtMode::Mint => Some(CallRequest::adjust_den(
            borrower_operations,
            den_manager,
            user,
            0,
            0,
            change,
            true,
            0,
        )),
    }
}

/// Advisory view of the pending debt change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebtChangePreview {
    /// Debt after the change, debt-token units
    pub new_debt: u128,
    /// Projected loan-to-value; `None` while undefined (no price, den
    /// closing, collateral valuing to zero)
    pub projected_ltv: Option<f64>,
}

pub fn preview_debt_change(
    position: &DenPosition,
    collateral_decimals: u8,
    price_usd: Option<f64>,
    amount_text: &str,
    mode: DebtMode,
) -> Option<DebtChangePreview> {
    if !position.exists() {
        return None;
    }
    let change = parse_units(amount_text, DEBT_TOKEN_DECIMALS).ok()?;
    if change == 0 {
        return None;
    }
    let new_debt = debt_after_change(position.debt, change, mode).ok()?;
    Some(DebtChangePreview {
        new_debt,
        projected_ltv: projected_ltv_after_debt(position, collateral_decimals, price_usd, new_debt),
    })
}
