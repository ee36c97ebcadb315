/// Core parsing logic and the public parse entry point.
///
/// Contains tokenization, the expression entry production, and the nesting
/// depth guard shared by the recursive productions.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for comparisons, additive,
/// multiplicative and exponentiation expressions, plus the token-to-operator
/// mapping functions.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, literals, identifiers and parenthesized groups.
pub mod unary;
