use crate::interpreter::value::complex::ComplexNumber;

/// Represents a literal value in an expression.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source text: integers, real numbers, and imaginary literals such as `3j`.
/// It is used in the AST to represent literal expressions and is converted
/// into a runtime [`Value`](crate::interpreter::value::core::Value) when the
/// literal is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A complex number literal, with real and imaginary parts.
    Complex(ComplexNumber),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<ComplexNumber> for LiteralValue {
    fn from(value: ComplexNumber) -> Self {
        Self::Complex(value)
    }
}

/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` is a closed set of node shapes: the evaluator matches on it
/// exhaustively, so no node can be silently skipped. Each node owns its
/// children; a tree is built once per input string and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal numeric value.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A bare identifier.
    ///
    /// Names parse (they are valid expression syntax) but the evaluator
    /// rejects them: the language has no variables.
    Variable {
        /// The identifier as written.
        name: String,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A chained relational expression such as `1 < 2 < 3`.
    ///
    /// The chain is ordered: each pair compares the previous right-hand
    /// value against its own operand, so `a < b < c` holds when both
    /// `a < b` and `b < c` hold.
    Comparison {
        /// The initial left-hand operand.
        first: Box<Self>,
        /// The ordered `(operator, operand)` pairs that follow.
        chain: Vec<(ComparisonOperator, Self)>,
    },
}

/// Represents a binary arithmetic operator.
///
/// This enum is the operator allow-list: an operator either has a variant
/// here (and exactly one evaluation function) or it cannot be parsed at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Exponentiation (`**`)
    Pow,
    /// Modulo (`%`)
    Mod,
}

/// Represents a relational operator inside a comparison chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Pow => "**",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
