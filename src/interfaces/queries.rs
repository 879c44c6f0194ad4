//! Read-only service boundary
//!
//! Every external figure this crate computes from (balances, positions,
//! prices, pool totals) arrives through one of these traits. The
//! implementations (RPC transport, HTTP price service) live in the
//! embedding application; the calculator only defines the shape and
//! treats every failure as "unavailable".

use thiserror::Error;

use crate::config::{Address, Token};
use crate::state::pool::PoolState;
use crate::state::position::DenPosition;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("backend query failed: {0}")]
    Backend(String),
}

/// Den position per (user, den manager) pair; `None` when no den is open
pub trait PositionSource {
    fn den_position(
        &self,
        user: Address,
        den_manager: Address,
    ) -> Result<Option<DenPosition>, QueryError>;

    /// Protocol-mandated minimum retained debt, from borrower operations.
    /// May legitimately be unavailable; closing detection degrades then.
    fn gas_compensation(&self) -> Result<Option<u128>, QueryError> {
        Ok(None)
    }
}

pub trait BalanceSource {
    fn balance(&self, user: Address, token: &Token) -> Result<u128, QueryError>;
}

pub trait AllowanceSource {
    fn allowance(
        &self,
        owner: Address,
        token: &Token,
        spender: Address,
    ) -> Result<u128, QueryError>;
}

/// External HTTP price service, keyed by feed identifier
pub trait PriceSource {
    fn usd_price(&self, feed_id: &str) -> Result<Option<f64>, QueryError>;
}

pub trait PoolSource {
    fn pool_state(&self, pool: Address, user: Address) -> Result<PoolState, QueryError>;

    /// WAD-scaled conversion price the pool holds for a deposit token
    fn pool_price(&self, pool: Address, token: Address) -> Result<Option<u128>, QueryError>;
}

/// Share previews from the pool contract
///
/// Callers must gate on pool emptiness first (`PoolState::plan_deposit_preview`);
/// previewing against an empty pool errors upstream.
pub trait PreviewSource {
    fn preview_deposit(&self, pool: Address, assets: u128) -> Result<u128, QueryError>;

    fn preview_withdraw(&self, pool: Address, assets: u128) -> Result<u128, QueryError>;
}
