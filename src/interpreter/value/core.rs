use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::format::{Notation, format_decimal, format_float},
    },
    util::num::{decimal_to_f64, f64_to_decimal},
};

/// A numeric runtime value.
///
/// Finite numbers are always held as exact decimals. `f64` only carries the
/// values a decimal cannot represent: `Infinity`, `-Infinity` and `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// A finite arbitrary-precision decimal.
    Decimal(BigDecimal),
    /// A plain floating-point number, in practice always non-finite.
    Float(f64),
}

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce. Only
/// `Value::Number` counts as a numeric result for the line driver; anything
/// else is displayed as nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value.
    Number(Number),
    /// A boolean value (`true` or `false`), produced by literals and
    /// comparison operators.
    Bool(bool),
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<BigDecimal> for Value {
    fn from(d: BigDecimal) -> Self {
        Self::Number(Number::Decimal(d))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Number::Decimal(BigDecimal::from(v)))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::from(n.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Number {
    /// Wraps an `f64` result, turning finite values back into decimals.
    ///
    /// # Example
    /// ```
    /// use calcpad::interpreter::value::core::Number;
    ///
    /// assert!(matches!(Number::from_f64(0.5), Number::Decimal(_)));
    /// assert!(matches!(Number::from_f64(f64::INFINITY), Number::Float(_)));
    /// ```
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        f64_to_decimal(value).map_or(Self::Float(value), Self::Decimal)
    }

    /// Returns the value as `f64`, or `None` when a decimal is outside the
    /// `f64` range.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Decimal(d) => decimal_to_f64(d),
            Self::Float(f) => Some(*f),
        }
    }

    /// Returns the value as `f64` for float arithmetic, saturating decimals
    /// that are too large to infinity of the matching sign.
    #[must_use]
    pub fn to_f64_lossy(&self) -> f64 {
        match self {
            Self::Decimal(d) => match decimal_to_f64(d) {
                Some(f) => f,
                None if d.is_zero() => 0.0,
                None if d < &BigDecimal::zero() => f64::NEG_INFINITY,
                None => f64::INFINITY,
            },
            Self::Float(f) => *f,
        }
    }

    /// Whether the number equals zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Decimal(d) => d.is_zero(),
            Self::Float(f) => *f == 0.0,
        }
    }

    /// Whether the number is `NaN`.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Float(f) if f.is_nan())
    }

    /// Formats the number in auto notation.
    ///
    /// # Example
    /// ```
    /// use calcpad::interpreter::value::{core::Number, format::Notation};
    ///
    /// let n = Number::from_f64(1e21);
    /// assert_eq!(n.to_auto_string(&Notation::default()), "1e+21");
    /// ```
    #[must_use]
    pub fn to_auto_string(&self, notation: &Notation) -> String {
        match self {
            Self::Decimal(d) => format_decimal(d, notation),
            Self::Float(f) => format_float(*f, notation),
        }
    }
}

impl Value {
    /// Returns the numeric payload, or an error if the value is not a number.
    ///
    /// # Example
    /// ```
    /// use calcpad::interpreter::value::core::Value;
    ///
    /// assert!(Value::from(3).as_number().is_ok());
    /// assert!(Value::Bool(true).as_number().is_err());
    /// ```
    pub fn as_number(&self) -> EvalResult<&Number> {
        match self {
            Self::Number(n) => Ok(n),
            other => Err(RuntimeError::ExpectedNumber { found: other.type_name() }),
        }
    }

    /// Human readable type name used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n.to_auto_string(&Notation::default())),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
