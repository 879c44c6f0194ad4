//! Client-side calculation layer for the Atium den protocol
//!
//! The den protocol's pages (deposit, withdraw, staking, swap, the
//! positions dashboard, and the testnet token faucet) all sit on the
//! same thin core: pure derivation functions
//! over externally supplied contract state. This crate is that core.
//!
//! ## What lives here
//! - Fixed-point unit parsing and decimal-scaling conversion into the
//!   debt token's 18-decimal unit
//! - Loan-to-value previews (current and projected) for dens
//! - Closing-position detection for withdrawals and repayments
//! - The mint amount / LTV slider form, modeled as one authoritative
//!   value with two projections
//! - Stability pool share math with empty-pool preview suppression
//! - Preparation of fully-formed borrower-operations, pool, and router
//!   calls
//!
//! ## What deliberately does not
//! Contract semantics are external and authoritative: everything this
//! crate computes is an advisory preview. Wallet transport, transaction
//! confirmation, and price fetching live behind the traits in
//! [`interfaces::queries`].
//!
//! Amounts that settle on-chain stay fixed-point u128 on checked,
//! truncating paths end to end; floats appear only in display-tier math
//! where precision loss is acceptable.

pub mod config;
pub mod constants;
pub mod errors;
pub mod interfaces;
pub mod math;
pub mod ops;
pub mod price;
pub mod state;

pub use config::{chain_config, known_chains, Address, ChainConfig, ProtocolContracts, Token};
pub use errors::ClientError;
pub use interfaces::calls::{CallRequest, ProtocolCall};
pub use price::{PriceBoard, PriceQuote};
pub use state::mint_form::MintForm;
pub use state::pool::{PoolState, PreviewPlan};
pub use state::position::{AdjustKind, DenPosition};
pub use state::session::Session;
