use crate::{
    ast::ComparisonOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates one pairwise comparison of the form `Value <op> Value`.
///
/// Equality promotes both numeric operands to complex and compares exactly,
/// so `1 == 1.0` and `1 + 0j == 1` both hold; booleans are equal only to
/// booleans, and a boolean never equals a number. Ordering comparisons
/// require real-valued operands: complex numbers are not ordered, and asking
/// for `1j < 2j` is a type fault rather than an arbitrary answer.
///
/// # Errors
/// - [`RuntimeError::TypeError`] when an ordering operator is applied to a
///   complex or boolean operand.
/// - [`RuntimeError::LiteralTooLarge`] when an integer operand cannot be
///   promoted exactly.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::ComparisonOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let held = eval_comparison(ComparisonOperator::Less, &Value::Real(3.0), &Value::Real(5.0));
/// assert!(held.unwrap());
/// ```
pub fn eval_comparison(op: ComparisonOperator, left: &Value, right: &Value) -> EvalResult<bool> {
    use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    match op {
        Equal => values_equal(left, right),
        NotEqual => Ok(!values_equal(left, right)?),

        Less | Greater | LessEqual | GreaterEqual => {
            if !is_ordered(left) || !is_ordered(right) {
                return Err(RuntimeError::TypeError { details:
                               format!("'{op}' is not supported between {} and {}",
                                       left.type_name(),
                                       right.type_name()), });
            }

            let left = left.as_real()?;
            let right = right.as_real()?;

            Ok(match op {
                   Less => left < right,
                   Greater => left > right,
                   LessEqual => left <= right,
                   GreaterEqual => left >= right,
                   _ => unreachable!(),
               })
        },
    }
}

/// Compares two values for equality.
///
/// Numeric pairs are promoted to complex and compared exactly; boolean pairs
/// compare directly; a boolean and a number are never equal.
fn values_equal(left: &Value, right: &Value) -> EvalResult<bool> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Bool(_), _) | (_, Value::Bool(_)) => Ok(false),
        (Value::Integer(a), Value::Integer(b)) => Ok(a == b),
        _ => Ok(left.as_complex()? == right.as_complex()?),
    }
}

/// Reports whether a value participates in ordering comparisons.
const fn is_ordered(value: &Value) -> bool {
    matches!(value, Value::Integer(_) | Value::Real(_))
}
