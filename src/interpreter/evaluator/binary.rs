/// Comparison operators.
pub mod comparison;
/// Operator dispatch.
pub mod core;
/// Exponentiation.
pub mod power;
/// Addition, subtraction, multiplication, division and modulo.
pub mod scalar;
