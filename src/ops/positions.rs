//! Positions dashboard: every open den for a user on one chain

use tracing::debug;

use crate::config::{Address, Token};
use crate::interfaces::queries::PositionSource;
use crate::state::position::DenPosition;

/// One open den, paired with the collateral token it is managed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDen {
    pub token: Token,
    pub position: DenPosition,
}

/// Fetch positions across all den-managed tokens, keeping only dens
/// that actually exist. Individual query failures drop that token from
/// the view rather than failing the whole dashboard.
pub fn load_open_dens(
    source: &impl PositionSource,
    user: Address,
    tokens: &[Token],
) -> Vec<OpenDen> {
    tokens
        .iter()
        .filter_map(|token| {
            let den_manager = token.den_manager?;
            match source.den_position(user, den_manager) {
                Ok(Some(position)) if position.exists() => Some(OpenDen {
                    token: token.clone(),
                    position,
                }),
                Ok(_) => None,
                Err(err) => {
                    debug!(symbol = %token.symbol, %err, "position query failed");
                    None
                }
            }
        })
        .collect()
}
