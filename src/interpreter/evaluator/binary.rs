/// Binary operator dispatch.
///
/// Routes each allow-listed operator to its evaluation function.
pub mod core;

/// Scalar arithmetic: `+`, `-`, `*`, `/`, `//` and `%`.
pub mod scalar;

/// Exponentiation (`**`) and the exponent safety guard.
pub mod power;

/// Pairwise comparison evaluation for comparison chains.
pub mod comparison;
