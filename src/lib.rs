//! # safecalc
//!
//! safecalc is a guarded arithmetic-expression evaluator written in Rust.
//! It parses a single-line mathematical expression into a syntax tree and
//! evaluates it against a fixed operator allow-list, enforcing a safety
//! limit on exponentiation and reporting every numeric fault (division by
//! zero, oversized exponents, type mismatches, overflow) as an ordinary
//! error value instead of a crash.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::{eval, exponent_exceeds_limit},
    parser::core::parse,
    value::core::Value,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression node shapes.
/// - Defines the operator allow-list as closed enums, so that "supported
///   operation" is a compile-time property with a single source of truth.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures.
///
/// # Responsibilities
/// - Defines error enums for both phases (parser, evaluator).
/// - Attaches column positions to parse errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and error handling to provide a complete pipeline from
/// source text to a result.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Standalone numeric routines (factorial, fibonacci, multiplication table).
///
/// These back the calculator's keyword commands and never go through the
/// expression pipeline.
pub mod special;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Provide the floored division and modulo behind `//` and `%`.
pub mod util;

/// Evaluates one expression string and returns its value.
///
/// This is the primary entry point: the source is parsed into a tree, the
/// tree is walked by the safe evaluator, and either a value or a readable
/// error message comes back. Every fault along the way, whether lexical,
/// syntactic or numeric, is an ordinary `Err`; nothing in the pipeline
/// panics, so the caller never needs a last-resort handler.
///
/// Evaluating the same string twice yields identical results: no state is
/// kept between calls, and each call builds and discards its own tree.
///
/// # Errors
/// Returns the underlying [`ParseError`](error::ParseError) or
/// [`RuntimeError`](error::RuntimeError), boxed; its `Display` output is the
/// user-facing message.
///
/// # Examples
/// ```
/// use safecalc::{evaluate_expression, interpreter::value::core::Value};
///
/// // Arithmetic follows the usual precedence rules.
/// let value = evaluate_expression("2 + 3 * 4").unwrap();
/// assert_eq!(value, Value::Integer(14));
///
/// // Chained comparisons conjoin pairwise results.
/// let value = evaluate_expression("1 < 2 < 3").unwrap();
/// assert_eq!(value, Value::Bool(true));
///
/// // Faults come back as messages, never as panics.
/// let error = evaluate_expression("1 / 0").unwrap_err();
/// assert_eq!(error.to_string(), "Division by zero is not allowed");
/// ```
pub fn evaluate_expression(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let expr = parse(source)?;
    let value = eval(&expr)?;
    Ok(value)
}

/// Reports whether any exponent in the expression exceeds the safety limit.
///
/// This is a pre-flight guard, independent of full evaluation: the source is
/// parsed and every `**` node's right operand is evaluated in isolation and
/// checked against
/// [`EXPONENT_LIMIT`](interpreter::evaluator::core::EXPONENT_LIMIT). Input
/// that cannot be parsed, or an exponent operand that cannot be evaluated,
/// is conservatively reported as exceeding the limit, so the guard fails
/// closed.
///
/// # Examples
/// ```
/// use safecalc::exceeds_exponent_limit;
///
/// assert!(!exceeds_exponent_limit("2 ** 8"));
/// assert!(exceeds_exponent_limit("2 ** 101"));
/// assert!(exceeds_exponent_limit("2 ** (50 + 51)"));
///
/// // Fails closed on unparseable input.
/// assert!(exceeds_exponent_limit("2 **"));
/// ```
#[must_use]
pub fn exceeds_exponent_limit(source: &str) -> bool {
    match parse(source) {
        Ok(expr) => exponent_exceeds_limit(&expr),
        Err(_) => true,
    }
}
