//! Error types for fallible internal computation paths
//!
//! Public derivation functions never surface these to the UI: fallible
//! paths degrade to `None` ("unavailable") at the crate boundary.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    // === Math Errors ===
    #[error("math overflow")]
    MathOverflow,

    #[error("math underflow")]
    MathUnderflow,

    #[error("division by zero")]
    DivisionByZero,

    #[error("decimal precision {0} out of range")]
    DecimalsOutOfRange(u8),

    // === Input Errors ===
    #[error("amount is not a valid decimal number")]
    InvalidAmount,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    // === Config Errors ===
    #[error("chain {0} is not configured")]
    UnknownChain(u64),
}

pub type Result<T> = core::result::Result<T, ClientError>;
