/// Core evaluation logic.
///
/// Contains the exponent limit constant, the tree-walking dispatch, the
/// chained-comparison semantics, and the exponent pre-scan walk.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the operations that take a single operand (negation).
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary arithmetic operations and the
/// pairwise comparisons used inside comparison chains.
pub mod binary;
