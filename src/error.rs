/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include syntax mistakes, unexpected tokens, and
/// any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression tree: division by zero, exponents beyond the safety limit,
/// type mismatches, overflow, and unsupported node shapes.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
