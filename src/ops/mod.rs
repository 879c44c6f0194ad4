//! Page-level flows: shared derivations wired into prepared calls

pub mod deposit;
pub mod faucet;
pub mod positions;
pub mod stake;
pub mod swap;
pub mod withdraw;

pub use deposit::*;
pub use faucet::*;
pub use positions::*;
pub use stake::*;
pub use swap::*;
pub use withdraw::*;
