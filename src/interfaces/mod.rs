//! External service boundaries: read-only queries in, prepared calls out

pub mod calls;
pub mod queries;

pub use calls::*;
pub use queries::*;
