//! Client-side state: positions, pool figures, form and session state

pub mod mint_form;
pub mod pool;
pub mod position;
pub mod session;

pub use mint_form::*;
pub use pool::*;
pub use position::*;
pub use session::*;
