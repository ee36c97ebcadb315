use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// The only unary operator in the allow-list is `Negate`, defined for
/// integers, reals and complex numbers. Negating a boolean (the result of a
/// parenthesized comparison) is a fault: comparison results never
/// participate in arithmetic.
///
/// # Errors
/// - [`RuntimeError::ExpectedNumber`] for a boolean operand.
/// - [`RuntimeError::Overflow`] when integer negation overflows.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(v, Value::Integer(-5));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Integer(n) => n.checked_neg()
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::Overflow),
            Value::Real(r) => Ok(Value::Real(-r)),
            Value::Complex(c) => Ok(Value::Complex(-*c)),
            Value::Bool(_) => Err(RuntimeError::ExpectedNumber),
        },
    }
}
