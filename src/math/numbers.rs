use super::TOLERANCE;
use crate::error::{NumericError, Result};

/// Returns whether `a` and `b` differ by less than [`TOLERANCE`].
#[must_use]
pub fn are_close_enough(a: f64, b: f64) -> bool {
    are_close_enough_with(a, b, TOLERANCE)
}

/// Returns whether `a` and `b` differ by less than `epsilon`.
#[must_use]
pub fn are_close_enough_with(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[must_use]
pub fn is_close_to_zero(a: f64) -> bool {
    are_close_enough(a, 0.0)
}

#[must_use]
pub fn is_close_to_zero_with(a: f64, epsilon: f64) -> bool {
    are_close_enough_with(a, 0.0, epsilon)
}

#[must_use]
pub fn is_close_to_one(a: f64) -> bool {
    are_close_enough(a, 1.0)
}

#[must_use]
pub fn is_close_to_one_with(a: f64, epsilon: f64) -> bool {
    are_close_enough_with(a, 1.0, epsilon)
}

/// Snaps `a` to exactly `0.0` when it is within [`TOLERANCE`] of zero.
#[must_use]
pub fn zero_or_number(a: f64) -> f64 {
    zero_or_number_with(a, TOLERANCE)
}

#[must_use]
pub fn zero_or_number_with(a: f64, epsilon: f64) -> f64 {
    if is_close_to_zero_with(a, epsilon) {
        0.0
    } else {
        a
    }
}

/// Sign of `a` as `-1.0`, `1.0` or `0.0`; zero and NaN are returned as is.
#[must_use]
pub fn sign(a: f64) -> f64 {
    if a == 0.0 || a.is_nan() {
        a
    } else {
        a.signum()
    }
}

/// Rounds `n` to the given number of decimal places.
#[must_use]
pub fn round_decimals(n: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (n * factor).round() / factor
}

/// Clamps `n` into `[lower, upper]`.
///
/// Values strictly inside the range are returned untouched, values within
/// tolerance of `lower` snap to `lower`.
#[must_use]
pub fn clamp(n: f64, lower: f64, upper: f64) -> f64 {
    if n > lower && n < upper {
        return n;
    }
    if are_close_enough(n, lower) {
        return lower;
    }
    if n < lower {
        lower
    } else {
        upper
    }
}

/// Divides `n` into `divisions - 1` equal integer parts plus a last part
/// holding the remainder, so the parts always add up to `n`.
///
/// # Errors
///
/// Returns `NumericError::NonPositiveDivisions` if `divisions` is zero.
pub fn divide_in_integer_parts(n: f64, divisions: u32) -> Result<Vec<f64>> {
    if divisions == 0 {
        return Err(NumericError::NonPositiveDivisions { divisions }.into());
    }

    let integer_n = (n / f64::from(divisions)).floor();
    let last = n - integer_n * f64::from(divisions - 1);

    let mut parts = vec![integer_n; (divisions - 1) as usize];
    parts.push(last);
    Ok(parts)
}
