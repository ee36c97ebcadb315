use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{power, scalar},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// This function routes the operation to the specialized handler for the
/// operator: the four basic arithmetic operators go to the scalar evaluator,
/// floor division and modulo to their floored variants, and `**` to
/// `eval_pow`. The match is exhaustive over the operator allow-list, so an
/// operator without an evaluation function cannot exist.
///
/// The caller is responsible for the exponent limit: the guard runs against
/// the evaluated right operand before this dispatch is reached.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let left = Value::Integer(3);
/// let right = Value::Integer(4);
///
/// let result = eval_binary(BinaryOperator::Add, &left, &right);
/// assert_eq!(result.unwrap(), Value::Integer(7));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

    match op {
        Add | Sub | Mul | Div => scalar::eval_scalar_op(op, left, right),
        FloorDiv => scalar::eval_floor_div(left, right),
        Mod => scalar::eval_mod(left, right),
        Pow => power::eval_pow(left, right),
    }
}
