#[derive(Debug)]
/// Represents all errors that can be raised while evaluating an expression.
///
/// Runtime messages carry no source position; the input is a single line.
pub enum RuntimeError {
    /// Attempted division (or floor division, or modulo) by zero.
    DivisionByZero,
    /// An exponent's magnitude was larger than the safety limit allows.
    ExponentLimitExceeded {
        /// The offending exponent, as the user would see it printed.
        exponent: String,
        /// The limit that was exceeded.
        limit:    f64,
    },
    /// Encountered a node shape the evaluator does not execute, such as a
    /// bare identifier.
    UnsupportedExpression,
    /// Operands had types the operator cannot work with.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber,
    /// An arithmetic operation overflowed the host numeric range.
    Overflow,
    /// An integer was too large to be represented exactly as a real number.
    LiteralTooLarge,
    /// The expression tree is deeper than the evaluator is willing to walk.
    TooDeeplyNested,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero is not allowed"),

            Self::ExponentLimitExceeded { exponent, limit } => {
                write!(f, "Exponent {exponent} exceeds the limit of {limit}")
            },

            Self::UnsupportedExpression => write!(f,
                                                  "Unsupported expression type. Please provide a valid input type."),

            Self::TypeError { details } => write!(f, "Type error: {details}."),

            Self::ExpectedNumber => write!(f, "Expected a number."),

            Self::Overflow => {
                write!(f, "Numeric overflow while trying to compute the result.")
            },

            Self::LiteralTooLarge => write!(f, "Literal is too large."),

            Self::TooDeeplyNested => write!(f, "Expression is nested too deeply."),
        }
    }
}

impl std::error::Error for RuntimeError {}
