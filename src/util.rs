/// Numeric conversion and floored-division helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without silent data loss, plus the floored division
/// and modulo used by the `//` and `%` operators. All fallible helpers
/// return a `Result` or `Option` instead of panicking.
pub mod num;
