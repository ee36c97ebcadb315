use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{complex::ZERO, core::Value},
    },
    util::num::{floor_div_i64, floor_mod_i64},
};

/// Evaluates a scalar arithmetic operation: `+`, `-`, `*` or `/`.
///
/// Operands are promoted along the numeric ladder: if either side is
/// complex, both are; otherwise if either side is real, both are; only an
/// integer pair stays integral. Division is true division (an integer pair
/// produces a real result), and division by zero is checked explicitly for
/// every numeric category. Integer addition, subtraction and multiplication
/// use checked arithmetic.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for a zero divisor.
/// - [`RuntimeError::Overflow`] when integer arithmetic overflows.
/// - [`RuntimeError::ExpectedNumber`] for boolean operands.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::scalar::eval_scalar_op, value::core::Value},
/// };
///
/// let result = eval_scalar_op(BinaryOperator::Div, &Value::Integer(10), &Value::Integer(4));
/// assert_eq!(result.unwrap(), Value::Real(2.5));
/// ```
pub fn eval_scalar_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Value::{Complex, Integer, Real};

    match (left, right) {
        (Complex(_), _) | (_, Complex(_)) => {
            let left = left.as_complex()?;
            let right = right.as_complex()?;

            Ok(Complex(match op {
                           Add => left + right,
                           Sub => left - right,
                           Mul => left * right,
                           Div => {
                               if right == ZERO {
                                   return Err(RuntimeError::DivisionByZero);
                               }
                               left / right
                           },
                           _ => unreachable!(),
                       }))
        },

        (Real(_), Integer(_) | Real(_)) | (Integer(_), Real(_)) => {
            let left = left.as_real()?;
            let right = right.as_real()?;

            Ok(Real(match op {
                        Add => left + right,
                        Sub => left - right,
                        Mul => left * right,
                        Div => {
                            if right == 0.0 {
                                return Err(RuntimeError::DivisionByZero);
                            }
                            left / right
                        },
                        _ => unreachable!(),
                    }))
        },

        (Integer(a), Integer(b)) => match op {
            Add => a.checked_add(*b).map(Integer).ok_or(RuntimeError::Overflow),
            Sub => a.checked_sub(*b).map(Integer).ok_or(RuntimeError::Overflow),
            Mul => a.checked_mul(*b).map(Integer).ok_or(RuntimeError::Overflow),
            Div => {
                if *b == 0 {
                    Err(RuntimeError::DivisionByZero)
                } else {
                    Ok(Real(left.as_real()? / right.as_real()?))
                }
            },
            _ => unreachable!(),
        },

        _ => Err(RuntimeError::ExpectedNumber),
    }
}

/// Evaluates a floor division (`//`).
///
/// The quotient is rounded toward negative infinity, so `-7 // 2` is `-4`.
/// An integer pair stays integral; a real on either side makes the result
/// real. Complex operands have no floor and are a type fault.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for a zero divisor.
/// - [`RuntimeError::Overflow`] for `i64::MIN // -1`.
/// - [`RuntimeError::TypeError`] for complex operands.
/// - [`RuntimeError::ExpectedNumber`] for boolean operands.
///
/// # Example
/// ```
/// use safecalc::interpreter::{evaluator::binary::scalar::eval_floor_div, value::core::Value};
///
/// let result = eval_floor_div(&Value::Integer(-7), &Value::Integer(2));
/// assert_eq!(result.unwrap(), Value::Integer(-4));
/// ```
pub fn eval_floor_div(left: &Value, right: &Value) -> EvalResult<Value> {
    use Value::{Complex, Integer, Real};

    match (left, right) {
        (Complex(_), _) | (_, Complex(_)) => Err(RuntimeError::TypeError { details:
                                                     "cannot take the floor of a complex number"
                                                         .to_string(), }),

        (Real(_), Integer(_) | Real(_)) | (Integer(_), Real(_)) => {
            let left = left.as_real()?;
            let right = right.as_real()?;
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Real((left / right).floor()))
        },

        (Integer(a), Integer(b)) => {
            if *b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            floor_div_i64(*a, *b).map(Integer).ok_or(RuntimeError::Overflow)
        },

        _ => Err(RuntimeError::ExpectedNumber),
    }
}

/// Evaluates a modulo (`%`).
///
/// The remainder is floored, taking the sign of the divisor: `-7 % 3` is
/// `2` and `7.5 % -2` is `-0.5`. Complex operands are a type fault, and a
/// zero divisor reports division by zero, since the remainder is undefined
/// for exactly the inputs division is.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for a zero divisor.
/// - [`RuntimeError::TypeError`] for complex operands.
/// - [`RuntimeError::ExpectedNumber`] for boolean operands.
///
/// # Example
/// ```
/// use safecalc::interpreter::{evaluator::binary::scalar::eval_mod, value::core::Value};
///
/// let result = eval_mod(&Value::Integer(-7), &Value::Integer(3));
/// assert_eq!(result.unwrap(), Value::Integer(2));
/// ```
pub fn eval_mod(left: &Value, right: &Value) -> EvalResult<Value> {
    use Value::{Complex, Integer, Real};

    match (left, right) {
        (Complex(_), _) | (_, Complex(_)) => Err(RuntimeError::TypeError { details:
                                                     "cannot take the modulo of a complex number"
                                                         .to_string(), }),

        (Real(_), Integer(_) | Real(_)) | (Integer(_), Real(_)) => {
            let left = left.as_real()?;
            let right = right.as_real()?;
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Real(left - right * (left / right).floor()))
        },

        (Integer(a), Integer(b)) => {
            if *b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            floor_mod_i64(*a, *b).map(Integer).ok_or(RuntimeError::Overflow)
        },

        _ => Err(RuntimeError::ExpectedNumber),
    }
}
