//! Amount parsing for `T` and `$` lines
//!
//! Malformed amounts never abort a conversion. Whatever cannot be read as a
//! finite number counts as [`AMOUNT_FALLBACK`] so the rest of the file is still
//! aggregated.

/// Value used when an amount payload cannot be parsed
pub const AMOUNT_FALLBACK: f64 = 0.0;

/// Parse the payload of an amount line
///
/// Surrounding whitespace is ignored. Signs, decimals and exponents are
/// accepted; thousands separators, currency symbols and non-finite values
/// (`NaN`, `inf`) are not.
pub fn parse_amount(payload: &str) -> f64 {
    match payload.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => {
            tracing::debug!(payload, "unreadable amount, using {AMOUNT_FALLBACK}");
            AMOUNT_FALLBACK
        }
    }
}
