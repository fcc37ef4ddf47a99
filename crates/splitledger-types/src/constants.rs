//! System-wide constants for SplitLedger.

/// Balances with magnitude at or below this many currency units are settled
/// (0.005, i.e. half a cent).
pub const DEFAULT_SETTLEMENT_EPSILON_MANTISSA: i64 = 5;

/// Scale of [`DEFAULT_SETTLEMENT_EPSILON_MANTISSA`].
pub const DEFAULT_SETTLEMENT_EPSILON_SCALE: u32 = 3;

/// Decimal places shown for amounts.
pub const DEFAULT_DISPLAY_SCALE: u32 = 2;

/// Currency symbol prefixed to formatted amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Largest scale `rust_decimal` can represent.
pub const MAX_DECIMAL_SCALE: u32 = 28;
