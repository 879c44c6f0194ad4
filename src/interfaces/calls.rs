//! Prepared transaction submissions
//!
//! The last stop inside this crate: fully-formed calls with integer
//! arguments and an optional native-value attachment, handed to the
//! embedding application's wallet layer. Nothing here inspects or
//! retries the submission.

use serde::{Deserialize, Serialize};

use crate::config::{Address, Token};
use crate::constants::MAX_FEE_PERCENTAGE;
use crate::interfaces::queries::{AllowanceSource, QueryError};

/// A call the wallet layer can submit as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    pub target: Address,
    pub call: ProtocolCall,
    /// Native value attached to the call (non-zero only for native
    /// collateral deposits)
    pub value: u128,
}

/// Protocol function calls with their full argument lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolCall {
    /// `openDen` on borrower operations
    OpenDen {
        den_manager: Address,
        account: Address,
        max_fee_percentage: u128,
        collateral_amount: u128,
        debt_amount: u128,
        upper_hint: Address,
        lower_hint: Address,
    },
    /// `adjustDen` on borrower operations
    AdjustDen {
        den_manager: Address,
        account: Address,
        max_fee_percentage: u128,
        coll_deposit: u128,
        coll_withdrawal: u128,
        debt_change: u128,
        is_debt_increase: bool,
        upper_hint: Address,
        lower_hint: Address,
    },
    /// `closeDen` on borrower operations
    CloseDen {
        den_manager: Address,
        account: Address,
    },
    /// ERC-20 `approve`
    Approve { spender: Address, amount: u128 },
    /// Stability pool `deposit`
    PoolDeposit {
        assets: u128,
        receiver: Address,
        input_token: Address,
    },
    /// Stability pool `withdraw` (assets denominated in the debt token)
    PoolWithdraw {
        assets: u128,
        receiver: Address,
        owner: Address,
    },
    /// Router `swap`
    Swap {
        token_in: Address,
        token_out: Address,
        amount_in: u128,
    },
    /// Test-token faucet `mint` on the token contract itself
    Mint { recipient: Address, amount: u128 },
}

impl CallRequest {
    pub fn open_den(
        borrower_operations: Address,
        den_manager: Address,
        account: Address,
        collateral_token: &Token,
        collateral_amount: u128,
        debt_amount: u128,
    ) -> Self {
        CallRequest {
            target: borrower_operations,
            call: ProtocolCall::OpenDen {
                den_manager,
                account,
                max_fee_percentage: MAX_FEE_PERCENTAGE,
                collateral_amount,
                debt_amount,
                upper_hint: Address::ZERO,
                lower_hint: Address::ZERO,
            },
            value: native_value(collateral_token, collateral_amount),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn adjust_den(
        borrower_operations: Address,
        den_manager: Address,
        account: Address,
        coll_deposit: u128,
        coll_withdrawal: u128,
        debt_change: u128,
        is_debt_increase: bool,
        value: u128,
    ) -> Self {
        CallRequest {
            target: borrower_operations,
            call: ProtocolCall::AdjustDen {
                den_manager,
                account,
                max_fee_percentage: MAX_FEE_PERCENTAGE,
                coll_deposit,
                coll_withdrawal,
                debt_change,
                is_debt_increase,
                upper_hint: Address::ZERO,
                lower_hint: Address::ZERO,
            },
            value,
        }
    }

    pub fn close_den(borrower_operations: Address, den_manager: Address, account: Address) -> Self {
        CallRequest {
            target: borrower_operations,
            call: ProtocolCall::CloseDen { den_manager, account },
            value: 0,
        }
    }

    pub fn approve(token: Address, spender: Address, amount: u128) -> Self {
        CallRequest {
            target: token,
            call: ProtocolCall::Approve { spender, amount },
            value: 0,
        }
    }

    pub fn pool_deposit(pool: Address, assets: u128, receiver: Address, input_token: Address) -> Self {
        CallRequest {
            target: pool,
            call: ProtocolCall::PoolDeposit { assets, receiver, input_token },
            value: 0,
        }
    }

    pub fn pool_withdraw(pool: Address, assets: u128, receiver: Address, owner: Address) -> Self {
        CallRequest {
            target: pool,
            call: ProtocolCall::PoolWithdraw { assets, receiver, owner },
            value: 0,
        }
    }

    pub fn swap(router: Address, token_in: Address, token_out: Address, amount_in: u128) -> Self {
        CallRequest {
            target: router,
            call: ProtocolCall::Swap { token_in, token_out, amount_in },
            value: 0,
        }
    }

    pub fn mint(token: Address, recipient: Address, amount: u128) -> Self {
        CallRequest {
            target: token,
            call: ProtocolCall::Mint { recipient, amount },
            value: 0,
        }
    }
}

/// Native collateral rides along as call value; ERC-20 collateral does not
fn native_value(token: &Token, amount: u128) -> u128 {
    if token.is_native() { amount } else { 0 }
}

/// Whether an `approve` must precede spending `required` of `token`
///
/// Native tokens never need approval; an unknown allowance is treated
/// as needing one.
pub fn needs_approval(token: &Token, allowance: Option<u128>, required: u128) -> bool {
    if token.is_native() {
        return false;
    }
    match allowance {
        None => true,
        Some(allowance) => allowance < required,
    }
}

/// Prepare the `approve` that must precede spending `required` of
/// `token`, against a live allowance query. `None` when the existing
/// allowance already covers the spend (or the token is native).
pub fn plan_approval(
    source: &impl AllowanceSource,
    owner: Address,
    token: &Token,
    spender: Address,
    required: u128,
) -> Result<Option<CallRequest>, QueryError> {
    if token.is_native() {
        return Ok(None);
    }
    let allowance = source.allowance(owner, token, spender)?;
    if needs_approval(token, Some(allowance), required) {
        Ok(Some(CallRequest::approve(token.address, spender, required)))
    } else {
        Ok(None)
    }
}
