/// Built-in function implementations.
///
/// Contains the trigonometric and exponential functions, `abs` and the
/// rounding family.
pub mod builtin;
/// Builtin lookup table and call dispatch.
pub mod core;
/// Logarithm function implementations.
///
/// Supports natural, base-10, base-2 and arbitrary-base logarithms.
pub mod log;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;
/// The `sqrt` (square root) function implementation.
///
/// Computes the square root of a non-negative number at working precision.
pub mod sqrt;
