//! Rounding and formatting helpers for amounts.
//!
//! Arithmetic everywhere else stays at full `Decimal` precision; these
//! functions are only for the presentation edge.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::DisplayConfig;

/// Round to `scale` places, halves away from zero.
#[must_use]
pub fn round_for_display(amount: Decimal, scale: u32) -> Decimal {
    amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

/// Whether `amount` is within `epsilon` of zero.
#[must_use]
pub fn is_negligible(amount: Decimal, epsilon: Decimal) -> bool {
    amount.abs() <= epsilon
}

/// Render an amount as `₹6.67` / `-₹3.33` with a fixed number of places.
#[must_use]
pub fn format_amount(amount: Decimal, display: &DisplayConfig) -> String {
    let mut rounded = round_for_display(amount, display.scale);
    rounded.rescale(display.scale);
    // "-0.00" after rounding dust reads as zero.
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}{}", display.currency_symbol, rounded.abs())
}

/// Like [`format_amount`], but balances at or above zero carry a `+`
/// (`+₹60.00`, `+₹0.00`, `-₹30.00`).
#[must_use]
pub fn format_signed_amount(amount: Decimal, display: &DisplayConfig) -> String {
    let formatted = format_amount(amount, display);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{formatted}")
    }
}
