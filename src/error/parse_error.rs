#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Columns are 1-based byte offsets into the single-line input.
pub enum ParseError {
    /// Found a token that does not fit the expression grammar.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The column where the error occurred.
        col:   usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The column of the unmatched `(`.
        col: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The column where the extra input starts.
        col:   usize,
    },
    /// The input contained no tokens at all.
    EmptyExpression,
    /// The input contained more tokens than one expression may have.
    ExpressionTooLong,
    /// The expression nests deeper than the parser is willing to follow.
    NestingTooDeep {
        /// The column at which the limit was hit.
        col: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, col } => {
                write!(f, "Unexpected token {token} at column {col}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::ExpectedClosingParen { col } => write!(f,
                                                         "Expected closing parenthesis ')' for the group opened at column {col}."),

            Self::UnexpectedTrailingTokens { token, col } => write!(f,
                                                                    "Extra tokens after the expression at column {col}: {token}."),

            Self::EmptyExpression => write!(f, "Expression is empty."),

            Self::ExpressionTooLong => write!(f, "Expression is too long."),

            Self::NestingTooDeep { col } => {
                write!(f, "Expression nesting is too deep at column {col}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
