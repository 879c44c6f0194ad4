//! Protocol constants and display policy values

// === Fixed-Point Constants ===

/// WAD = 1e18 (standard DeFi fixed-point)
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Decimal precision of the ATIUM debt token (and of all debt figures)
pub const DEBT_TOKEN_DECIMALS: u8 = 18;

/// Symbol of the protocol's debt token, defined 1:1 with USD
pub const DEBT_TOKEN_SYMBOL: &str = "ATIUM";

// === Borrower Operations Constants ===

/// Max borrowing fee forwarded with every open/adjust call
/// (1e17 WAD-scaled = 10%)
pub const MAX_FEE_PERCENTAGE: u128 = 100_000_000_000_000_000;

/// Upper bound of the loan-to-value control, in percent
pub const MAX_LTV_PERCENT: u16 = 1000;

// === Closing Detection ===

/// Absolute tolerance absorbing float noise from decimal-string
/// round-tripping. Identical for the withdrawal and repayment paths;
/// the comparison is strict `<`.
pub const CLOSE_TOLERANCE: f64 = 0.0001;

// === Price Feed Policy ===

/// How often the external price service is polled (seconds)
pub const PRICE_REFRESH_SECS: i64 = 60;

/// Age past which a quote is no longer trusted for new computations
pub const PRICE_STALE_SECS: i64 = 30;

// === Display Policy ===

/// Decimal places for derived display amounts (round-half-up tier,
/// distinct from the truncating settlement math)
pub const DISPLAY_DECIMALS: u32 = 2;
