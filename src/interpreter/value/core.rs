use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::complex::ComplexNumber},
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value produced by evaluation.
///
/// This enum models every type an expression can produce: the three numeric
/// categories, and the booleans produced by comparison chains. Booleans have
/// no literal form in the source language; they only ever come out of a
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64-bit signed).
    Integer(i64),
    /// A real value (double precision floating-point).
    Real(f64),
    /// A complex number (with real and imaginary parts).
    Complex(ComplexNumber),
    /// A boolean value, produced by comparison operators (`<`, `==`, ...).
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
            LiteralValue::Complex(c) => Self::Complex(c),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not real or
    /// integer.
    ///
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Errors
    /// - [`RuntimeError::ExpectedNumber`] for complex or boolean values.
    /// - [`RuntimeError::LiteralTooLarge`] for integers outside the exact
    ///   `f64` range.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_real().unwrap(), 10.0);
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge),
            _ => Err(RuntimeError::ExpectedNumber),
        }
    }

    /// Converts the value to a [`ComplexNumber`], or returns an error if not
    /// numeric.
    ///
    /// Accepts `Complex`, `Real`, and `Integer` values.
    ///
    /// # Errors
    /// - [`RuntimeError::ExpectedNumber`] for boolean values.
    /// - [`RuntimeError::LiteralTooLarge`] for integers outside the exact
    ///   `f64` range.
    pub fn as_complex(&self) -> EvalResult<ComplexNumber> {
        match self {
            Self::Complex(c) => Ok(*c),
            Self::Real(r) => Ok(ComplexNumber::from(*r)),
            Self::Integer(n) => {
                Ok(ComplexNumber::from(i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge)?))
            },
            Self::Bool(_) => Err(RuntimeError::ExpectedNumber),
        }
    }

    /// Returns the magnitude of a numeric value: the absolute value for
    /// integers and reals, the modulus for complex numbers.
    ///
    /// Used for the exponent guard, where only threshold comparisons are
    /// made; integers above the exact `f64` range lose precision here but
    /// cannot change the outcome of such a comparison.
    ///
    /// # Errors
    /// [`RuntimeError::ExpectedNumber`] for boolean values.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// assert_eq!(Value::Integer(-101).magnitude().unwrap(), 101.0);
    /// assert_eq!(Value::Complex(ComplexNumber::new(3.0, 4.0)).magnitude().unwrap(),
    ///            5.0);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn magnitude(&self) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => Ok(n.unsigned_abs() as f64),
            Self::Real(r) => Ok(r.abs()),
            Self::Complex(c) => Ok(c.abs()),
            Self::Bool(_) => Err(RuntimeError::ExpectedNumber),
        }
    }

    /// Returns the name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Complex(_) => "complex",
            Self::Bool(_) => "boolean",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
