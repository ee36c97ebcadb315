use std::{fmt::Display, ops};

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imaginary) {
            (0.0, 0.0) => write!(f, "0"),
            (real, 0.0) => write!(f, "{real}"),
            (0.0, imaginary) => write!(f, "{imaginary}j"),
            (real, imaginary) if imaginary > 0.0 => write!(f, "{real} + {imaginary}j"),
            (real, imaginary) => write!(f, "{real} - {}j", -imaginary),
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the reciprocal (1/z) of the complex number.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(2.0, 0.0);
    /// assert!((c.recip().real - 0.5).abs() < 1e-10);
    /// assert!(c.recip().imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub const fn recip(&self) -> Self {
        let norm_squared = self.real * self.real + self.imaginary * self.imaginary;

        Self { real:      self.real / norm_squared,
               imaginary: -(self.imaginary / norm_squared), }
    }

    /// Returns the argument (phase angle) in radians.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.arg() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Returns the exponential of the complex number.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, 0.0);
    /// assert!((z.exp().real - 1.0).abs() < 1e-10);
    /// assert!(z.exp().imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the natural logarithm (principal branch) of the complex
    /// number.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(1.0, 0.0);
    /// assert!(z.ln().real.abs() < 1e-10);
    /// assert!(z.ln().imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }

    /// Raises the complex number to a floating-point power, in polar form.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(4.0, 0.0);
    /// let res = c.powf(0.5);
    /// assert!((res.real - 2.0).abs() < 1e-10);
    /// assert!(res.imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn powf(self, exp: f64) -> Self {
        let r = self.abs();
        let theta = self.arg();

        let new_r = r.powf(exp);
        let new_theta = theta * exp;

        Self { real:      new_r * new_theta.cos(),
               imaginary: new_r * new_theta.sin(), }
    }

    /// Raises the complex number to a complex power via `exp(w ln z)`.
    ///
    /// The caller is responsible for the zero-base special cases; `ln` of
    /// zero is not finite.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::complex::ComplexNumber;
    /// // i ** i is real: e^(-pi/2)
    /// let i = ComplexNumber::new(0.0, 1.0);
    /// let res = i.powc(i);
    /// assert!((res.real - (-std::f64::consts::FRAC_PI_2).exp()).abs() < 1e-10);
    /// assert!(res.imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn powc(self, exponent: Self) -> Self {
        (exponent * self.ln()).exp()
    }

    /// Raises the complex number to an integer power.
    ///
    /// Performs square-and-multiply with overflow and division-by-zero
    /// checks.
    ///
    /// # Parameters
    /// - `exp`: The exponent (may be negative).
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] for a zero base and negative
    ///   exponent.
    /// - [`RuntimeError::Overflow`] when an intermediate result stops being
    ///   finite.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::complex::{ComplexNumber, ONE};
    /// let c = ComplexNumber::new(2.0, 0.0);
    /// assert_eq!(c.checked_powi(0).unwrap(), ONE.into());
    /// assert_eq!(c.checked_powi(3).unwrap(),
    ///            ComplexNumber::new(8.0, 0.0).into());
    /// ```
    pub fn checked_powi(self, exp: i64) -> EvalResult<Value> {
        if exp == 0 {
            return Ok(ONE.into());
        }

        if self.real == 0.0 && self.imaginary == 0.0 && exp < 0 {
            return Err(RuntimeError::DivisionByZero);
        }

        let mut base = self;
        let mut result = ONE;
        let mut n = exp.unsigned_abs();

        while n > 0 {
            if n % 2 == 1 {
                result *= base;
                if !result.real.is_finite() || !result.imaginary.is_finite() {
                    return Err(RuntimeError::Overflow);
                }
            }
            base = base * base;
            if n > 1 && (!base.real.is_finite() || !base.imaginary.is_finite()) {
                return Err(RuntimeError::Overflow);
            }
            n /= 2;
        }

        if exp < 0 {
            result = result.recip();
            if !result.real.is_finite() || !result.imaginary.is_finite() {
                return Err(RuntimeError::Overflow);
            }
        }

        Ok(result.into())
    }
}

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> Self {
        Self { real,
               imaginary: 0.0 }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { real:      self.real * rhs.real - self.imaginary * rhs.imaginary,
               imaginary: self.real * rhs.imaginary + self.imaginary * rhs.real, }
    }
}

impl ops::MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.recip()
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}
