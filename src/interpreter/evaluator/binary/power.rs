use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EXPONENT_LIMIT, EvalResult},
        value::{
            complex::{ComplexNumber, ZERO},
            core::Value,
        },
    },
};

/// Checks an evaluated exponent operand against [`EXPONENT_LIMIT`].
///
/// The magnitude of the exponent (absolute value for integers and reals,
/// modulus for complex numbers) must not exceed the limit. The failure
/// message names both the offending value and the limit.
///
/// # Errors
/// - [`RuntimeError::ExponentLimitExceeded`] when the magnitude is over the
///   limit.
/// - [`RuntimeError::ExpectedNumber`] when the exponent is not numeric.
///
/// # Example
/// ```
/// use safecalc::interpreter::{evaluator::binary::power::check_exponent_limit, value::core::Value};
///
/// assert!(check_exponent_limit(&Value::Integer(100)).is_ok());
/// assert!(check_exponent_limit(&Value::Integer(-101)).is_err());
/// ```
pub fn check_exponent_limit(exponent: &Value) -> EvalResult<()> {
    if exponent.magnitude()? > EXPONENT_LIMIT {
        return Err(RuntimeError::ExponentLimitExceeded { exponent: exponent.to_string(),
                                                         limit:    EXPONENT_LIMIT, });
    }
    Ok(())
}

/// Evaluates an exponentiation operation.
///
/// Integer base and non-negative integer exponent use checked integer
/// arithmetic; a negative integer exponent moves to floating point. Complex
/// bases support integer, real and complex exponents, and a negative real
/// base with a fractional exponent is computed in the complex plane rather
/// than producing a NaN. A zero base with a negative (or complex with
/// nonzero imaginary part) exponent reports division by zero.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for zero raised to a negative or
///   genuinely complex power.
/// - [`RuntimeError::Overflow`] when the result leaves the host numeric
///   range.
/// - [`RuntimeError::ExpectedNumber`] for boolean operands.
///
/// # Example
/// ```
/// use safecalc::interpreter::{evaluator::binary::power::eval_pow, value::core::Value};
///
/// let result = eval_pow(&Value::Integer(2), &Value::Integer(10));
/// assert_eq!(result.unwrap(), Value::Integer(1024));
/// ```
pub fn eval_pow(base: &Value, exponent: &Value) -> EvalResult<Value> {
    use Value::{Complex, Integer, Real};

    match (base, exponent) {
        (Integer(b), Integer(e)) => {
            if *e < 0 {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Real(base.as_real()?.powf(exponent.as_real()?)))
            } else {
                let exp = u32::try_from(*e).map_err(|_| RuntimeError::Overflow)?;
                b.checked_pow(exp).map(Integer).ok_or(RuntimeError::Overflow)
            }
        },

        (Complex(b), Integer(e)) => b.checked_powi(*e),

        (Complex(b), Real(e)) => checked_finite(b.powf(*e)),

        (Complex(_), Complex(_)) | (Integer(_) | Real(_), Complex(_)) => {
            let base = base.as_complex()?;
            let exponent = exponent.as_complex()?;
            eval_powc(base, exponent)
        },

        (Integer(_) | Real(_), Integer(_) | Real(_)) => {
            let b = base.as_real()?;
            let e = exponent.as_real()?;

            if b == 0.0 && e < 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            // A negative base with a fractional exponent has no real result;
            // it promotes to the complex plane instead of producing a NaN.
            if b < 0.0 && e.fract() != 0.0 {
                return checked_finite(ComplexNumber::from(b).powf(e));
            }

            let result = b.powf(e);
            if !result.is_finite() && b.is_finite() {
                return Err(RuntimeError::Overflow);
            }
            Ok(Real(result))
        },

        _ => Err(RuntimeError::ExpectedNumber),
    }
}

/// Raises a complex base to a complex power, handling the zero-base special
/// cases that `exp(w ln z)` cannot.
fn eval_powc(base: ComplexNumber, exponent: ComplexNumber) -> EvalResult<Value> {
    if base == ZERO {
        if exponent == ZERO {
            return Ok(Value::Integer(1));
        }
        if exponent.imaginary == 0.0 && exponent.real > 0.0 {
            return Ok(Value::Complex(ZERO));
        }
        return Err(RuntimeError::DivisionByZero);
    }

    checked_finite(base.powc(exponent))
}

/// Wraps a computed complex result, reporting overflow when it has left the
/// finite range.
fn checked_finite(result: ComplexNumber) -> EvalResult<Value> {
    if result.real.is_finite() && result.imaginary.is_finite() {
        Ok(Value::Complex(result))
    } else {
        Err(RuntimeError::Overflow)
    }
}
