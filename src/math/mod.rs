//! Math library modules for the calculation layer

pub mod convert;
pub mod ratio;
pub mod safe_math;
pub mod shares;
pub mod units;
pub mod wad;

pub use convert::*;
pub use ratio::*;
pub use safe_math::*;
pub use shares::*;
pub use units::*;
pub use wad::*;
