// ============================================================================
// Fractional Digit Inference
// Counting significant fractional digits of a double
// ============================================================================
//
// Two distinct answers to "how many decimals does this value have":
// - decimals: every significant fractional digit, at 12-digit resolution
// - first_significant_decimal: position of the first nonzero fractional
//   digit, at 10-digit resolution (tick-size style inference)
//
// 0.0015 -> decimals = 4, first_significant_decimal = 3
// ============================================================================

/// Resolution used by [`decimals`].
pub const STRICT_DECIMALS_DIGITS: usize = 12;

/// Resolution used by [`first_significant_decimal`].
pub const HEURISTIC_DECIMALS_DIGITS: usize = 10;

/// Returned by both inference functions for NaN and infinite input.
pub const UNKNOWN_DECIMALS: i32 = -1;

/// Fixed-point render of `value` at `width` digits with trailing zeros
/// removed, returning only the fractional digits.
fn trimmed_fraction(value: f64, width: usize) -> String {
    let formatted = format!("{:.*}", width, value);
    match formatted.trim_end_matches('0').split_once('.') {
        Some((_, fraction)) => fraction.to_owned(),
        None => String::new(),
    }
}

/// Count of significant fractional digits, up to 12.
///
/// # Example
/// ```
/// use trade_helpers::numeric::decimals;
///
/// assert_eq!(decimals(0.001), 3);
/// assert_eq!(decimals(0.0015), 4);
/// assert_eq!(decimals(1.0), 0);
/// assert_eq!(decimals(f64::NAN), -1);
/// ```
pub fn decimals(value: f64) -> i32 {
    if !value.is_finite() {
        return UNKNOWN_DECIMALS;
    }
    trimmed_fraction(value, STRICT_DECIMALS_DIGITS).len() as i32
}

/// One-based position of the first nonzero fractional digit, at 10-digit
/// resolution; 0 when the value has no fractional part at that resolution.
///
/// Not interchangeable with [`decimals`]: only the leading significant digit
/// counts, so `0.0015` yields 3.
///
/// # Example
/// ```
/// use trade_helpers::numeric::first_significant_decimal;
///
/// assert_eq!(first_significant_decimal(0.0010), 3);
/// assert_eq!(first_significant_decimal(0.0015), 3);
/// assert_eq!(first_significant_decimal(5.0), 0);
/// assert_eq!(first_significant_decimal(f64::NAN), -1);
/// ```
pub fn first_significant_decimal(value: f64) -> i32 {
    if !value.is_finite() {
        return UNKNOWN_DECIMALS;
    }
    trimmed_fraction(value, HEURISTIC_DECIMALS_DIGITS)
        .bytes()
        .position(|digit| digit != b'0')
        .map_or(0, |pos| pos as i32 + 1)
}
