use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{MAX_DEPTH, ParseResult, parse_expression},
        },
        value::complex::ComplexNumber,
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation), which is
/// right-associative: `--5` parses as `-(-5)`. When no unary operator is
/// present the function delegates to the exponentiation level, so that
/// `-2 ** 2` comes out as `-(2 ** 2)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Minus, col)) = tokens.peek() {
        if depth > MAX_DEPTH {
            return Err(ParseError::NestingTooDeep { col: *col });
        }
        tokens.next();
        let expr = parse_unary(tokens, depth + 1)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr), })
    } else {
        parse_power(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - integer, real and imaginary literals
/// - identifiers (parsed as [`Expr::Variable`], rejected later by the
///   evaluator)
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := INTEGER | REAL | IMAGINARY
///              | identifier
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, col) = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Integer(n) => {
            let value = (*n).into();
            tokens.next();
            Ok(Expr::Literal { value })
        },
        Token::Real(r) => {
            let value = (*r).into();
            tokens.next();
            Ok(Expr::Literal { value })
        },
        Token::Imaginary(i) => {
            let value = ComplexNumber::new(0.0, *i).into();
            tokens.next();
            Ok(Expr::Literal { value })
        },
        Token::Identifier(name) => {
            let name = name.clone();
            tokens.next();
            Ok(Expr::Variable { name })
        },
        Token::LParen => {
            let col = *col;
            tokens.next();
            parse_grouping(tokens, col, depth)
        },
        _ => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                               col:   *col, }),
    }
}

/// Parses the remainder of a parenthesized expression.
///
/// Expected form: `expression ")"`, with the opening parenthesis already
/// consumed. A missing `)` yields [`ParseError::ExpectedClosingParen`]
/// pointing at the opening parenthesis.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, col: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, depth + 1)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { col }),
    }
}
