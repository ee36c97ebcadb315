/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the expression tree bottom-up, applies the allow-listed
/// operators, enforces the exponentiation safety limit, and reports every
/// numeric fault as a recoverable error. It is stateless: each call is a
/// single traversal of a freshly built tree.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Enforces the exponent limit before applying `**`.
/// - Reports runtime faults such as division by zero or invalid operand
///   types without ever panicking.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw expression text and produces a stream of tokens:
/// numeric literals (integer, real, imaginary), identifiers, operators, and
/// parentheses. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with column positions.
/// - Handles the three literal forms and all operator spellings.
/// - Turns malformed or oversized literals into lexical errors.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST representing one expression. It establishes structure only:
/// operator legality is the type system's concern, and identifier rejection
/// is the evaluator's.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the expression grammar, reporting errors with column info.
/// - Rejects empty input, trailing tokens, and runaway nesting.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types produced during evaluation: integers,
/// reals, complex numbers, and the booleans produced by comparisons. It also
/// provides checked conversions between numeric categories.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements checked conversion and magnitude helpers.
/// - Provides the complex-number arithmetic the evaluator relies on.
pub mod value;
