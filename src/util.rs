/// Decimal conversion and precision helpers.
///
/// This module provides the conversions between `BigDecimal` and `f64` used
/// by the evaluator and the line driver, the working-precision rounding rule,
/// and exact integer exponentiation.
///
/// Conversions that can lose information return `Option`; callers decide
/// whether a failure is an error or falls back to a default.
pub mod num;
