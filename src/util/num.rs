/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_U64_INT`] in
/// absolute value.
///
/// ## Example
/// ```
/// use safecalc::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside the safe range
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Divides two integers, rounding the quotient toward negative infinity.
///
/// This is the quotient that pairs with [`floor_mod_i64`]: for any nonzero
/// `b`, `a == floor_div_i64(a, b) * b + floor_mod_i64(a, b)`.
///
/// ## Returns
/// `None` when `b` is zero or the division overflows (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use safecalc::util::num::floor_div_i64;
///
/// assert_eq!(floor_div_i64(7, 2), Some(3));
/// assert_eq!(floor_div_i64(-7, 2), Some(-4));
/// assert_eq!(floor_div_i64(-7, -2), Some(3));
/// assert_eq!(floor_div_i64(1, 0), None);
/// assert_eq!(floor_div_i64(i64::MIN, -1), None);
/// ```
#[must_use]
pub fn floor_div_i64(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    let remainder = a - quotient * b;

    if remainder != 0 && (remainder < 0) != (b < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Computes the floored remainder of two integers.
///
/// The result takes the sign of the divisor, so `-7 % 3` is `2` and
/// `7 % -3` is `-2`.
///
/// ## Returns
/// `None` when `b` is zero or the intermediate remainder overflows.
///
/// ## Example
/// ```
/// use safecalc::util::num::floor_mod_i64;
///
/// assert_eq!(floor_mod_i64(7, 3), Some(1));
/// assert_eq!(floor_mod_i64(-7, 3), Some(2));
/// assert_eq!(floor_mod_i64(7, -3), Some(-2));
/// assert_eq!(floor_mod_i64(1, 0), None);
/// ```
#[must_use]
pub fn floor_mod_i64(a: i64, b: i64) -> Option<i64> {
    let remainder = a.checked_rem(b)?;

    if remainder != 0 && (remainder < 0) != (b < 0) {
        Some(remainder + b)
    } else {
        Some(remainder)
    }
}
