//! Stability pool state and share preview planning
//!
//! The pool accounts in the debt token's 18-decimal unit. Stakes in any
//! other token are rescaled through the pool's own WAD price before a
//! preview is requested. Previewing against an empty pool is known to
//! error upstream, so planning treats "empty pool" as its own outcome
//! instead of attempting the call.

use tracing::debug;

use crate::config::Token;
use crate::constants::DEBT_TOKEN_DECIMALS;
use crate::math::convert::debt_units_from_text;
use crate::math::shares;
use crate::math::units::parse_units;

/// Raw pool figures for one user, fetched together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolState {
    pub total_shares: u128,
    /// Total pool assets, in debt-token units
    pub total_assets: u128,
    pub user_shares: u128,
}

/// Outcome of planning a deposit preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPlan {
    /// Safe to ask the pool contract for an expected-share figure
    Request { assets: u128 },
    /// Empty pool: shares are only determined at execution time, the
    /// preview query must not be issued
    ExecuteTimeOnly,
}

impl PoolState {
    pub fn is_empty(&self) -> bool {
        self.total_shares == 0
    }

    /// User's proportional ownership, display-only
    pub fn ownership_percentage(&self) -> Option<f64> {
        shares::ownership_percentage(self.user_shares, self.total_shares)
    }

    /// Value of the user's slice of the pool's assets, in debt-token units
    pub fn composition_value(&self) -> Option<u128> {
        shares::composition_value(self.user_shares, self.total_shares, self.total_assets)
    }

    /// Gate a deposit preview on pool emptiness
    pub fn plan_deposit_preview(&self, assets_in_pool_unit: u128) -> PreviewPlan {
        if assets_in_pool_unit == 0 {
            return PreviewPlan::ExecuteTimeOnly;
        }
        if self.is_empty() {
            debug!("empty pool, suppressing share preview");
            return PreviewPlan::ExecuteTimeOnly;
        }
        PreviewPlan::Request { assets: assets_in_pool_unit }
    }
}

/// Convert a stake amount into the pool's accounting unit
///
/// The debt token passes through at its own decimals; anything else
/// needs the pool's WAD price and goes through the decimal-scaling
/// converter. `None` when the text, amount, or price does not yield a
/// positive figure.
pub fn stake_assets_in_pool_unit(
    token: &Token,
    amount_text: &str,
    pool_price_wad: Option<u128>,
) -> Option<u128> {
    if token.is_debt_token() {
        let assets = parse_units(amount_text, DEBT_TOKEN_DECIMALS).ok()?;
        if assets == 0 {
            return None;
        }
        return Some(assets);
    }
    debt_units_from_text(amount_text, pool_price_wad, token.decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Address;
    use crate::constants::WAD;

    fn pool(total_shares: u128, total_assets: u128, user_shares: u128) -> PoolState {
        PoolState { total_shares, total_assets, user_shares }
    }

    fn debt_token() -> Token {
        Token {
            address: Address::ZERO,
            symbol: "ATIUM".into(),
            name: "Atium".into(),
            decimals: 18,
            price_feed_id: None,
            den_manager: None,
        }
    }

    fn usdc() -> Token {
        Token {
            address: Address::ZERO,
            symbol: "USDC".into(),
            name: "USD Coin".into(),
            decimals: 6,
            price_feed_id: Some("usd-coin".into()),
            den_manager: None,
        }
    }

    #[test]
    fn test_preview_suppressed_for_empty_pool() {
        assert_eq!(
            pool(0, 0, 0).plan_deposit_preview(WAD),
            PreviewPlan::ExecuteTimeOnly
        );
        assert_eq!(
            pool(100, 100, 0).plan_deposit_preview(WAD),
            PreviewPlan::Request { assets: WAD }
        );
        // nothing to preview
        assert_eq!(
            pool(100, 100, 0).plan_deposit_preview(0),
            PreviewPlan::ExecuteTimeOnly
        );
    }

    #[test]
    fn test_ownership_and_composition() {
        let state = pool(1000, 4000 * WAD, 250);
        assert_eq!(state.ownership_percentage(), Some(25.0));
        assert_eq!(state.composition_value(), Some(1000 * WAD));

        assert_eq!(pool(0, 0, 0).ownership_percentage(), None);
        assert_eq!(pool(1000, 4000 * WAD, 0).composition_value(), None);
    }

    #[test]
    fn test_stake_conversion() {
        // the debt token passes through unconverted
        assert_eq!(
            stake_assets_in_pool_unit(&debt_token(), "2", None),
            Some(2 * WAD)
        );
        // a six-decimal stable converts through the pool price
        assert_eq!(
            stake_assets_in_pool_unit(&usdc(), "2", Some(WAD)),
            Some(2 * WAD)
        );
        // no price, no conversion
        assert_eq!(stake_assets_in_pool_unit(&usdc(), "2", None), None);
        assert_eq!(stake_assets_in_pool_unit(&debt_token(), "0", None), None);
    }
}
