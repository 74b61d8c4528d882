/// The outcome of evaluating one line of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum LineResult {
    /// Nothing to show: an empty, comment, separator or prose line, or an
    /// expression with a non-numeric value.
    Blank,
    /// A numeric result.
    Display {
        /// Auto-notation string produced by the engine.
        raw:    String,
        /// Floating-point approximation, `0` if the value does not fit.
        approx: f64,
    },
    /// The line could not be evaluated.
    Error,
}

impl LineResult {
    /// Returns the raw string of a `Display` result.
    ///
    /// # Example
    /// ```
    /// use calcpad::sheet::result::LineResult;
    ///
    /// let result = LineResult::Display { raw:    "42".to_string(),
    ///                                    approx: 42.0, };
    ///
    /// assert_eq!(result.raw(), Some("42"));
    /// assert_eq!(LineResult::Blank.raw(), None);
    /// ```
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Display { raw, .. } => Some(raw),
            Self::Blank | Self::Error => None,
        }
    }

    /// Returns the approximation of a `Display` result.
    #[must_use]
    pub const fn approx(&self) -> Option<f64> {
        match self {
            Self::Display { approx, .. } => Some(*approx),
            Self::Blank | Self::Error => None,
        }
    }

    /// Whether the line failed to evaluate.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}
