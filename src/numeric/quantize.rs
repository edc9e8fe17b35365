// ============================================================================
// Step Quantization
// Snapping a value down onto a tick/lot grid
// ============================================================================

use super::digits::decimals;
use super::errors::{PrecisionError, PrecisionResult};

/// Quotient error allowance in ulps of the quotient.
const GRID_ULPS: f64 = 4.0;

/// A validated quantization step (tick size or lot size).
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Step(f64);

impl Step {
    /// Create a step.
    ///
    /// # Errors
    /// Returns `InvalidStep` if `step` is zero, negative, NaN or infinite.
    #[inline]
    pub fn new(step: f64) -> PrecisionResult<Self> {
        if step.is_finite() && step > 0.0 {
            Ok(Self(step))
        } else {
            Err(PrecisionError::InvalidStep)
        }
    }

    /// The raw step size.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Strict fractional digit count of the step itself.
    ///
    /// This is the natural display precision of values quantized to it.
    #[inline]
    pub fn decimals(self) -> i32 {
        decimals(self.0)
    }

    /// Largest multiple of this step that is `<= value`.
    ///
    /// Computed as `step * floor(value / step)`, except that a quotient within
    /// a few ulps of an integer `n` is taken as already on the grid and yields
    /// `min(step * n, value)`. Anything farther below the grid line, however
    /// close in absolute terms, floors to the previous multiple. Non-finite
    /// values, and values whose quotient overflows, are returned unchanged.
    ///
    /// The same rule serves prices and amounts, on either side of the book.
    pub fn quantize_down(self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }

        let ticks = value / self.0;
        if !ticks.is_finite() {
            return value;
        }

        let nearest = ticks.round();
        let tolerance = ticks.abs() * GRID_ULPS * f64::EPSILON;
        if (ticks - nearest).abs() <= tolerance {
            return (self.0 * nearest).min(value);
        }

        self.0 * ticks.floor()
    }
}

impl TryFrom<f64> for Step {
    type Error = PrecisionError;

    fn try_from(step: f64) -> Result<Self, Self::Error> {
        Self::new(step)
    }
}

/// Round `value` down to a multiple of `step`.
///
/// # Errors
/// Returns `InvalidStep` if `step` is not finite and strictly positive.
///
/// # Example
/// ```
/// use trade_helpers::numeric::quantize_down;
///
/// assert_eq!(quantize_down(10.999, 1.0).unwrap(), 10.0);
/// assert_eq!(quantize_down(-0.15, 0.1).unwrap(), -0.2);
/// assert!(quantize_down(1.0, 0.0).is_err());
/// ```
#[inline]
pub fn quantize_down(value: f64, step: f64) -> PrecisionResult<f64> {
    Step::new(step).map(|step| step.quantize_down(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_step_validation() {
        assert!(Step::new(0.01).is_ok());
        assert_eq!(Step::new(0.0), Err(PrecisionError::InvalidStep));
        assert_eq!(Step::new(-1.0), Err(PrecisionError::InvalidStep));
        assert_eq!(Step::new(f64::NAN), Err(PrecisionError::InvalidStep));
        assert_eq!(Step::new(f64::INFINITY), Err(PrecisionError::InvalidStep));
        assert_eq!(Step::try_from(0.5).map(Step::get), Ok(0.5));
    }

    #[test]
    fn test_quantize_down() {
        assert_eq!(quantize_down(10.999, 1.0).unwrap(), 10.0);
        assert_eq!(quantize_down(12.0, 5.0).unwrap(), 10.0);
        assert_eq!(quantize_down(0.0, 0.25).unwrap(), 0.0);
        assert_eq!(quantize_down(1.3, 0.25).unwrap(), 1.25);
        assert_eq!(quantize_down(-1.3, 0.25).unwrap(), -1.5);
    }

    #[test]
    fn test_quantize_decimal_steps() {
        // 0.3 / 0.1 == 2.9999999999999996 in binary
        assert_eq!(quantize_down(0.3, 0.1).unwrap(), 0.3);
        assert_eq!(quantize_down(0.7, 0.1).unwrap(), 0.7);
        assert_eq!(quantize_down(1.15, 0.05).unwrap(), 1.15);
    }

    #[test]
    fn test_quantize_just_below_grid() {
        assert_eq!(quantize_down(2.9999999999, 1.0).unwrap(), 2.0);
        assert_eq!(quantize_down(0.29999999999, 0.1).unwrap(), 0.2);
        assert_eq!(quantize_down(-1.0000000001, 1.0).unwrap(), -2.0);
        // Tiny steps keep their own grid
        assert_eq!(quantize_down(1.5, 1e-13).unwrap(), 1.5);
    }

    #[test]
    fn test_quantize_invalid_step() {
        assert_eq!(quantize_down(1.0, 0.0), Err(PrecisionError::InvalidStep));
        assert_eq!(quantize_down(1.0, -0.01), Err(PrecisionError::InvalidStep));
        assert_eq!(quantize_down(1.0, f64::NAN), Err(PrecisionError::InvalidStep));
    }

    #[test]
    fn test_quantize_non_finite_value() {
        assert!(quantize_down(f64::NAN, 0.1).unwrap().is_nan());
        assert_eq!(quantize_down(f64::INFINITY, 0.1).unwrap(), f64::INFINITY);
        assert_eq!(quantize_down(1e308, 1e-10).unwrap(), 1e308);
    }

    #[test]
    fn test_step_decimals() {
        assert_eq!(Step::new(0.01).unwrap().decimals(), 2);
        assert_eq!(Step::new(0.00025).unwrap().decimals(), 5);
        assert_eq!(Step::new(5.0).unwrap().decimals(), 0);
    }

    proptest! {
        #[test]
        fn prop_quantize_bounded(v in -1.0e6f64..1.0e6f64, step in 1.0e-6f64..1.0e3f64) {
            let q = quantize_down(v, step).unwrap();
            prop_assert!(q <= v);
            prop_assert!(v - q < step + v.abs() * 1e-12 + 1e-12);
            let ticks = q / step;
            let allowance = ticks.abs() * 8.0 * f64::EPSILON;
            prop_assert!((ticks - ticks.round()).abs() <= allowance);
        }

        #[test]
        fn prop_quantize_on_grid_is_identity(n in -1_000_000i64..1_000_000i64, step in 1.0e-4f64..1.0e2f64) {
            let v = step * n as f64;
            prop_assert_eq!(quantize_down(v, step).unwrap(), v);
        }

        #[test]
        fn prop_quantize_idempotent(v in -1.0e6f64..1.0e6f64, step in 1.0e-4f64..1.0e2f64) {
            let once = quantize_down(v, step).unwrap();
            prop_assert_eq!(quantize_down(once, step).unwrap(), once);
        }
    }
}
