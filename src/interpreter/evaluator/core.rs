use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{comparison::eval_comparison, core::eval_binary, power::check_exponent_limit},
            unary::eval_unary,
        },
        parser::core::MAX_DEPTH,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Largest magnitude an exponent operand may have.
///
/// The right-hand operand of every `**` is evaluated first and its magnitude
/// checked against this limit before the power is computed, so that
/// untrusted input cannot request runaway exponentiation.
pub const EXPONENT_LIMIT: f64 = 100.0;

/// Evaluates an expression tree and returns the resulting value.
///
/// This is the main entry point for evaluation. The walk is stateless and
/// pure: no context is read or written, and the two possible outcomes per
/// node (a value, or a tagged error) compose bottom-up. The first failing
/// subexpression short-circuits the walk.
///
/// # Errors
/// Returns a [`RuntimeError`] for any fault the tree can produce: an
/// identifier node, a division by zero, an exponent beyond
/// [`EXPONENT_LIMIT`], an operand type the operator cannot work with,
/// numeric overflow, or a tree deeper than the recursion bound.
///
/// # Examples
/// ```
/// use safecalc::interpreter::{evaluator::core::eval, parser::core::parse, value::core::Value};
///
/// let expr = parse("2 + 3 * 4").unwrap();
/// assert_eq!(eval(&expr).unwrap(), Value::Integer(14));
///
/// let expr = parse("1 / 0").unwrap();
/// assert!(eval(&expr).is_err());
/// ```
pub fn eval(expr: &Expr) -> EvalResult<Value> {
    eval_at(expr, 0)
}

/// Evaluates one node at a given recursion depth.
///
/// The depth bound mirrors the parser's: trees assembled by the iterative
/// precedence loops (long `+` chains, long comparison chains) can be deeper
/// than anything the parser recursed for, so the evaluator carries its own
/// guard.
fn eval_at(expr: &Expr, depth: usize) -> EvalResult<Value> {
    if depth > MAX_DEPTH {
        return Err(RuntimeError::TooDeeplyNested);
    }

    match expr {
        Expr::Literal { value } => Ok(Value::from(*value)),

        Expr::Variable { .. } => Err(RuntimeError::UnsupportedExpression),

        Expr::UnaryOp { op, expr } => {
            let value = eval_at(expr, depth + 1)?;
            eval_unary(*op, &value)
        },

        Expr::BinaryOp { left, op, right } => {
            let left = eval_at(left, depth + 1)?;
            let right = eval_at(right, depth + 1)?;

            if matches!(op, BinaryOperator::Pow) {
                check_exponent_limit(&right)?;
            }

            eval_binary(*op, &left, &right)
        },

        Expr::Comparison { first, chain } => eval_comparison_chain(first, chain, depth),
    }
}

/// Evaluates a chained comparison such as `1 < 2 < 3`.
///
/// The initial operand is evaluated once; each `(operator, operand)` pair
/// then compares the previous right-hand value against its freshly evaluated
/// operand, and the right-hand value becomes the left side of the next pair.
/// Every pair in the chain is evaluated and its boolean collected even after
/// an earlier comparison has already failed; only at the end are the results
/// conjoined. Optimizing this to an early exit would change which operands
/// get evaluated, so the evaluate-all shape is load-bearing.
fn eval_comparison_chain(first: &Expr,
                         chain: &[(ComparisonOperator, Expr)],
                         depth: usize)
                         -> EvalResult<Value> {
    let mut left = eval_at(first, depth + 1)?;
    let mut results = Vec::with_capacity(chain.len());

    for (op, operand) in chain {
        let right = eval_at(operand, depth + 1)?;
        results.push(eval_comparison(*op, &left, &right)?);
        left = right;
    }

    Ok(Value::Bool(results.iter().all(|&held| held)))
}

/// Reports whether any `**` node in the tree has an exponent beyond
/// [`EXPONENT_LIMIT`].
///
/// Each power node's right operand is evaluated in isolation; if that
/// evaluation fails, or produces something without a magnitude, the operand
/// is conservatively treated as exceeding the limit. Both sides of every
/// node are walked, so nested powers are all inspected. Like the rest of
/// this guard, the walk fails closed: a tree too deep to finish walking
/// counts as exceeding the limit.
#[must_use]
pub fn exponent_exceeds_limit(expr: &Expr) -> bool {
    walk_exceeds(expr, 0)
}

fn walk_exceeds(expr: &Expr, depth: usize) -> bool {
    if depth > MAX_DEPTH {
        return true;
    }

    match expr {
        Expr::Literal { .. } | Expr::Variable { .. } => false,

        Expr::UnaryOp { expr, .. } => walk_exceeds(expr, depth + 1),

        Expr::BinaryOp { left, op, right } => {
            if matches!(op, BinaryOperator::Pow) {
                let exceeded = match eval(right) {
                    Ok(value) => value.magnitude()
                                      .map_or(true, |magnitude| magnitude > EXPONENT_LIMIT),
                    Err(_) => true,
                };
                if exceeded {
                    return true;
                }
            }
            walk_exceeds(left, depth + 1) || walk_exceeds(right, depth + 1)
        },

        Expr::Comparison { first, chain } => {
            walk_exceeds(first, depth + 1)
            || chain.iter().any(|(_, operand)| walk_exceeds(operand, depth + 1))
        },
    }
}
