use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_primary, parse_unary},
        },
    },
};

/// Parses a comparison chain.
///
/// All relational operators share one precedence level and chain: an input
/// like `1 < 2 < 3` produces a single [`Expr::Comparison`] node holding the
/// first operand and the ordered `(operator, operand)` pairs, rather than a
/// nested tree. An input with no relational operator passes through
/// unchanged.
///
/// Grammar: `comparison := additive (("==" | "!=" | "<" | "<=" | ">" | ">=") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// The additive expression itself, or an [`Expr::Comparison`] wrapping it.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let first = parse_additive(tokens, depth)?;

    let mut chain = Vec::new();
    while let Some((token, _)) = tokens.peek() {
        let Some(op) = token_to_comparison_operator(token) else {
            break;
        };
        tokens.next();

        let operand = parse_additive(tokens, depth)?;
        chain.push((op, operand));
    }

    if chain.is_empty() {
        Ok(first)
    } else {
        Ok(Expr::Comparison { first: Box::new(first),
                              chain })
    }
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `//` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::FloorDiv
                       | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses an exponentiation expression.
///
/// Exponentiation is right-associative and binds tighter than unary minus on
/// its left while admitting unary minus on its right: `-2 ** 2` parses as
/// `-(2 ** 2)` and `2 ** -3` is legal. Both properties come from routing the
/// right operand back through the unary level.
///
/// The rule is: `power := primary ("**" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned at a primary expression.
///
/// # Returns
/// A primary expression, possibly raised to a parsed exponent.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_primary(tokens, depth)?;

    if let Some((Token::DoubleStar, _)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens, depth + 1)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(exponent), });
    }

    Ok(base)
}

/// Maps a token to its corresponding binary arithmetic operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the
/// allow-listed arithmetic operators, and `None` for all other tokens.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Maps a token to its corresponding comparison operator.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::ComparisonOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_comparison_operator},
/// };
///
/// assert_eq!(token_to_comparison_operator(&Token::Less),
///            Some(ComparisonOperator::Less));
/// assert_eq!(token_to_comparison_operator(&Token::Plus), None);
/// ```
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        Token::Less => Some(ComparisonOperator::Less),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        _ => None,
    }
}
