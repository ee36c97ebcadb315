//! Standalone numeric routines behind the calculator's keyword commands.
//!
//! These bypass the expression evaluator entirely: the prompt reads a single
//! number and calls one of them directly. Overflow is a first-class outcome
//! (`None`), never a panic.

/// Computes `n!`.
///
/// ## Returns
/// `None` when the product overflows a `u64` (first at `21!`).
///
/// ## Example
/// ```
/// use safecalc::special::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(21), None);
/// ```
#[must_use]
pub fn factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1u64, u64::checked_mul)
}

/// Computes the `n`-th Fibonacci number, for negative `n` too.
///
/// Negative indices follow the negafibonacci identity
/// `F(-n) = (-1)^(n + 1) * F(n)`, so `F(-8)` is `-21`.
///
/// ## Returns
/// `None` when the value overflows an `i64` (first at `F(93)`).
///
/// ## Example
/// ```
/// use safecalc::special::fibonacci;
///
/// assert_eq!(fibonacci(0), Some(0));
/// assert_eq!(fibonacci(10), Some(55));
/// assert_eq!(fibonacci(-8), Some(-21));
/// assert_eq!(fibonacci(93), None);
/// ```
#[must_use]
pub fn fibonacci(n: i64) -> Option<i64> {
    let steps = n.unsigned_abs();
    if steps == 0 {
        return Some(0);
    }

    let mut pair = (0i64, 1i64);
    for _ in 1..steps {
        pair = (pair.1, pair.0.checked_add(pair.1)?);
    }

    let value = pair.1;
    if n < 0 && steps % 2 == 0 {
        value.checked_neg()
    } else {
        Some(value)
    }
}

/// Renders the multiplication table of `n` from 1 through 10.
///
/// ## Example
/// ```
/// use safecalc::special::table;
///
/// assert!(table(3).contains("3 X 7 = 21"));
/// assert_eq!(table(0), "Multiplicative property of zero");
/// ```
#[must_use]
pub fn table(n: i64) -> String {
    if n == 0 {
        return "Multiplicative property of zero".to_string();
    }

    (1..=10)
        .map(|i| format!("{n} X {i} = {}", i128::from(n) * i128::from(i)))
        .collect::<Vec<_>>()
        .join("\n")
}
