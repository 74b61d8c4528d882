/// Core value definitions.
///
/// Defines the `Value` enum (numbers and booleans) and the `Number` enum that
/// separates exact decimals from the non-finite floats `Infinity` and `NaN`.
pub mod core;
/// Auto-notation formatting.
///
/// Renders numbers as fixed-point or scientific strings depending on their
/// magnitude, rounded to a fixed number of significant digits.
pub mod format;
