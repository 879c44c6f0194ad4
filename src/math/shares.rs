//! Pool share display math
//!
//! Proportional ownership and composition value for the stability pool,
//! derived from raw share and supply figures on every read. Share counts
//! drop to floats here because these values are display-only; the pool
//! contract's own preview functions are the authority for anything that
//! settles on-chain.

/// User's proportional ownership of the pool, in percent
///
/// Undefined while the user holds no shares or the pool is empty.
pub fn ownership_percentage(user_shares: u128, total_shares: u128) -> Option<f64> {
    if user_shares == 0 || total_shares == 0 {
        return None;
    }
    Some(user_shares as f64 / total_shares as f64 * 100.0)
}

/// USD-denominated value of the user's slice of the pool's assets,
/// floored back to an integer to stay consistent with other
/// on-chain-denominated figures
pub fn composition_value(user_shares: u128, total_shares: u128, total_assets: u128) -> Option<u128> {
    if total_assets == 0 {
        return None;
    }
    let pct = ownership_percentage(user_shares, total_shares)?;
    let value = pct / 100.0 * total_assets as f64;
    Some(value.floor() as u128)
}
