// ============================================================================
// Fixed Normalization
// Round-half-away-from-zero at a fixed number of fractional digits
// ============================================================================

use rust_decimal::Decimal;

/// Number of fractional digits used by [`normalize`] and [`format_normalized`].
pub const NORMALIZE_DIGITS: u32 = 8;

/// Significant digits kept before the fractional cap is applied.
const SIGNIFICANT_DIGITS: u32 = 15;

/// Highest digit count accepted by [`round_half_away`].
const MAX_ROUND_DIGITS: u32 = 15;

/// Highest digit count accepted by [`format_with_precision`] (Decimal max scale).
const MAX_FORMAT_DIGITS: u32 = 28;

/// Integer division of `n` by `10^power`, ties away from zero.
fn div_pow10_ties_away(n: i128, power: u32) -> i128 {
    // |n| < 10^15, so anything past 10^16 rounds to zero
    if power > SIGNIFICANT_DIGITS + 1 {
        return 0;
    }
    let divisor = 10i128.pow(power);
    let quotient = n / divisor;
    let remainder = n % divisor;
    if 2 * remainder.abs() >= divisor {
        quotient + n.signum()
    } else {
        quotient
    }
}

/// `value` cut to 15 significant digits, then rounded to `digits` fractional
/// digits with ties away from zero.
///
/// Returns `None` for non-finite values and results beyond Decimal range.
fn round_to_decimal(value: f64, digits: u32) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }

    // d.dddddddddddddde<exp>: correctly rounded to 15 significant digits
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e')?;
    let mantissa: i128 = mantissa.replace('.', "").parse().ok()?;
    let exponent: i32 = exponent.parse().ok()?;

    // mantissa * 10^(exponent - 14) expressed at scale `digits`
    let shift = exponent - (SIGNIFICANT_DIGITS as i32 - 1) + digits as i32;
    let scaled = if shift >= 0 {
        mantissa.checked_mul(10i128.checked_pow(shift as u32)?)?
    } else {
        div_pow10_ties_away(mantissa, shift.unsigned_abs())
    };

    Decimal::try_from_i128_with_scale(scaled, digits).ok()
}

/// Round `value` to `digits` fractional digits, ties away from zero.
///
/// The value is first taken at 15 significant digits (its conventional
/// decimal rendering), so `1.000000005` is a tie at 8 digits even though its
/// binary value lies just below it. `digits` is capped at 15.
///
/// Non-finite values and values beyond Decimal range (~7.9e28 at the
/// requested scale) are returned as is.
///
/// # Example
/// ```
/// use trade_helpers::numeric::round_half_away;
///
/// assert_eq!(round_half_away(2.5, 0), 3.0);
/// assert_eq!(round_half_away(-2.5, 0), -3.0);
/// assert_eq!(round_half_away(0.125, 2), 0.13);
/// ```
pub fn round_half_away(value: f64, digits: u32) -> f64 {
    match round_to_decimal(value, digits.min(MAX_ROUND_DIGITS)) {
        Some(rounded) => rounded.to_string().parse().unwrap_or(value),
        None => value,
    }
}

/// Round `value` to 8 fractional digits, ties away from zero.
#[inline]
pub fn normalize(value: f64) -> f64 {
    round_half_away(value, NORMALIZE_DIGITS)
}

/// Render `value` with at most `digits` fractional digits and no trailing zeros.
///
/// Uses the same rounding as [`round_half_away`], so parsing the output and
/// rounding again gives back the rounded value. The decimal separator is
/// always `.`. Non-finite values render as `NaN`, `inf` and `-inf`.
pub fn format_with_precision(value: f64, digits: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = digits.min(MAX_FORMAT_DIGITS);
    match round_to_decimal(value, digits) {
        Some(rounded) => rounded.normalize().to_string(),
        // Beyond Decimal range (|value| > ~7.9e28) there is no fraction left
        None => trim_fraction(format!("{:.*}", digits as usize, value)),
    }
}

/// Render `value` with at most 8 fractional digits and no trailing zeros.
///
/// Formats the raw value, not [`normalize`]d one.
///
/// # Example
/// ```
/// use trade_helpers::numeric::format_normalized;
///
/// assert_eq!(format_normalized(1.23456789123), "1.23456789");
/// assert_eq!(format_normalized(1000000.5), "1000000.5");
/// assert_eq!(format_normalized(2.0), "2");
/// ```
#[inline]
pub fn format_normalized(value: f64) -> String {
    format_with_precision(value, NORMALIZE_DIGITS)
}

fn trim_fraction(mut s: String) -> String {
    if s.contains('.') {
        let len = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(len);
    }
    s
}
