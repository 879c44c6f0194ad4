//! Stablecoin / debt token swap flow

use crate::config::{Address, ChainConfig, ProtocolContracts, Token};
use crate::interfaces::calls::CallRequest;
use crate::interfaces::queries::BalanceSource;
use crate::math::units::{format_units, parse_units};

/// Which way the swap page is pointed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    StableToDebt,
    DebtToStable,
}

/// Resolve the swap pair `(in, out)` for a chain: the chain's
/// USDC-equivalent stable on one side, the debt token on the other.
/// The debt token descriptor comes from an external contract read;
/// `None` when the chain lists no stable.
pub fn swap_pair(
    config: &ChainConfig,
    debt_token: &Token,
    direction: SwapDirection,
) -> Option<(Token, Token)> {
    let stable = config.usdc_equivalent_token()?.clone();
    Some(match direction {
        SwapDirection::StableToDebt => (stable, debt_token.clone()),
        SwapDirection::DebtToStable => (debt_token.clone(), stable),
    })
}

/// Prepare a router `swap` between two tokens
pub fn plan_swap(
    contracts: &ProtocolContracts,
    token_in: &Token,
    token_out: &Token,
    amount_text: &str,
) -> Option<CallRequest> {
    let router = contracts.swap_router?;
    let amount_in = parse_units(amount_text, token_in.decimals).ok()?;
    if amount_in == 0 {
        return None;
    }
    Some(CallRequest::swap(
        router,
        token_in.address,
        token_out.address,
        amount_in,
    ))
}

/// "Max" helper: the user's full balance as field text
pub fn max_spendable_text(
    source: &impl BalanceSource,
    user: Address,
    token: &Token,
) -> Option<String> {
    let balance = source.balance(user, token).ok()?;
    Some(format_units(balance, token.decimals))
}
