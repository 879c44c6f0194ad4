//! Test-token faucet flow
//!
//! Testnet deployments expose `mint(to, amount)` directly on the token
//! contracts, with a fixed grant per token kind. Native tokens have no
//! contract to call, so they are never mintable.

use crate::config::{Address, Token};
use crate::interfaces::calls::CallRequest;
use crate::math::units::parse_units;

/// Fixed faucet grant for a token, as field text
pub fn faucet_amount_text(token: &Token) -> Option<&'static str> {
    match token.symbol.to_uppercase().as_str() {
        "WBTC" | "TRBTC" => Some("10"),
        "WETH" => Some("1000"),
        "USDC" | "USDRIF" => Some("100000"),
        _ => None,
    }
}

/// Prepare the faucet `mint` for one token
pub fn plan_faucet_mint(token: &Token, recipient: Address) -> Option<CallRequest> {
    if token.is_native() {
        return None;
    }
    let amount = parse_units(faucet_amount_text(token)?, token.decimals).ok()?;
    Some(CallRequest::mint(token.address, recipient, amount))
}

/// The faucet page's token list: everything with a grant and a contract
pub fn mintable_tokens(tokens: &[Token]) -> Vec<&Token> {
    tokens
        .iter()
        .filter(|t| !t.is_native() && faucet_amount_text(t).is_some())
        .collect()
}
