//! Collateral deposit and withdrawal flow
//!
//! Turns the deposit page's inputs into a prepared call: `openDen` for a
//! first position, `adjustDen` for adding or partially removing
//! collateral, `closeDen` when the removal empties the den. The same
//! closing rule as the repayment path decides the last case.

use crate::config::{Address, ProtocolContracts, Token};
use crate::constants::DEBT_TOKEN_DECIMALS;
use crate::interfaces::calls::CallRequest;
use crate::math::ratio::{projected_ltv_after_collateral, CollateralMode};
use crate::math::units::{parse_positive_amount, parse_units};
use crate::state::position::{classify_withdrawal, AdjustKind, DenPosition};

/// Prepare the borrower-operations call for a collateral change
///
/// `mint_text` is only consulted when no den exists yet: opening a den
/// requires a debt amount alongside the collateral. Returns `None`
/// whenever the inputs do not form a submittable call (no contract on
/// this chain, no den manager for the token, zero amounts).
pub fn plan_collateral_change(
    contracts: &ProtocolContracts,
    user: Address,
    token: &Token,
    position: Option<DenPosition>,
    amount_text: &str,
    mode: CollateralMode,
    mint_text: &str,
) -> Option<CallRequest> {
    let borrower_operations = contracts.borrower_operations?;
    let den_manager = token.den_manager?;

    let amount = parse_units(amount_text, token.decimals).ok()?;
    if amount == 0 {
        return None;
    }
    let native_value = if token.is_native() { amount } else { 0 };

    match position.filter(DenPosition::exists) {
        Some(position) => match mode {
            CollateralMode::Add => Some(CallRequest::adjust_den(
                borrower_operations,
                den_manager,
                user,
                amount,
                0,
                0,
                false,
                native_value,
            )),
            CollateralMode::Remove => {
                match classify_withdrawal(&position, token.decimals, amount_text) {
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
                        amount,
                        0,
                        false,
                        0,
                    )),
                }
            }
        },
        None => {
            // opening: collateral and debt together
            let debt_amount = parse_units(mint_text, DEBT_TOKEN_DECIMALS).ok()?;
            if debt_amount == 0 {
                return None;
            }
            Some(CallRequest::open_den(
                borrower_operations,
                den_manager,
                user,
                token,
                amount,
                debt_amount,
            ))
        }
    }
}

/// Projected loan-to-value for the pending collateral change, advisory
pub fn preview_collateral_change(
    position: &DenPosition,
    collateral_decimals: u8,
    price_usd: Option<f64>,
    amount_text: &str,
    mode: CollateralMode,
) -> Option<f64> {
    let pending = parse_positive_amount(amount_text)?;
    projected_ltv_after_collateral(position, collateral_decimals, price_usd, pending, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::chain_config;
    use crate::constants::WAD;
    use crate::interfaces::calls::ProtocolCall;

    const HATSIN: u64 = 2_763_818_285_453_000;

    fn setup() -> (ProtocolContracts, Token, Address) {
        let config = chain_config(HATSIN).unwrap();
        let weth = config.tokens[0].clone();
        let user: Address = "0x3cdedd8d288ed07bace7fd3f12d0057af55a07c6".parse().unwrap();
        (config.contracts, weth, user)
    }

    #[test]
    fn test_open_den_when_no_position() {
        let (contracts, weth, user) = setup();
        let call =
            plan_collateral_change(&contracts, user, &weth, None, "5", CollateralMode::Add, "4000")
                .unwrap();
        match call.call {
            ProtocolCall::OpenDen { collateral_amount, debt_amount, .. } => {
                assert_eq!(collateral_amount, 5 * WAD);
                assert_eq!(debt_amount, 4000 * WAD);
            }
            other => panic!("expected OpenDen, got {other:?}"),
        }
        // WETH is not the native token, nothing rides along
        assert_eq!(call.value, 0);
    }

    #[test]
    fn test_open_den_requires_debt_amount() {
        let (contracts, weth, user) = setup();
        assert!(plan_collateral_change(
            &contracts, user, &weth, None, "5", CollateralMode::Add, ""
        )
        .is_none());
    }

    #[test]
    fn test_add_collateral_adjusts() {
        let (contracts, weth, user) = setup();
        let position = DenPosition { collateral: 5 * WAD, debt: 4000 * WAD };
        let call = plan_collateral_change(
            &contracts, user, &weth, Some(position), "2", CollateralMode::Add, "",
        )
        .unwrap();
        match call.call {
            ProtocolCall::AdjustDen { coll_deposit, coll_withdrawal, debt_change, .. } => {
                assert_eq!(coll_deposit, 2 * WAD);
                assert_eq!(coll_withdrawal, 0);
                assert_eq!(debt_change, 0);
            }
            other => panic!("expected AdjustDen, got {other:?}"),
        }
    }

    #[test]
    fn test_remove_all_collateral_closes() {
        let (contracts, weth, user) = setup();
        let position = DenPosition { collateral: 5 * WAD, debt: 0 };

        let partial = plan_collateral_change(
            &contracts, user, &weth, Some(position), "2", CollateralMode::Remove, "",
        )
        .unwrap();
        assert!(matches!(partial.call, ProtocolCall::AdjustDen { coll_withdrawal, .. } if coll_withdrawal == 2 * WAD));

        let closing = plan_collateral_change(
            &contracts, user, &weth, Some(position), "5", CollateralMode::Remove, "",
        )
        .unwrap();
        assert!(matches!(closing.call, ProtocolCall::CloseDen { .. }));
    }

    #[test]
    fn test_missing_contract_or_amount() {
        let (_, weth, user) = setup();
        let empty = ProtocolContracts::default();
        assert!(plan_collateral_change(
            &empty, user, &weth, None, "5", CollateralMode::Add, "4000"
        )
        .is_none());

        let (contracts, weth, user) = setup();
        assert!(plan_collateral_change(
            &contracts, user, &weth, None, "0", CollateralMode::Add, "4000"
        )
        .is_none());
    }

    #[test]
    fn test_preview_collateral_change() {
        let position = DenPosition { collateral: 5 * WAD, debt: 4000 * WAD };
        // 5 WETH @ $2000 = $10k, adding 5 more → $20k, LTV 20%
        assert_eq!(
            preview_collateral_change(&position, 18, Some(2000.0), "5", CollateralMode::Add),
            Some(20.0)
        );
        assert_eq!(
            preview_collateral_change(&position, 18, Some(2000.0), "", CollateralMode::Add),
            None
        );
    }
}
