use std::sync::LazyLock;

use regex::Regex;

use crate::{
    interpreter::value::core::Value,
    sheet::context::{ANSWER_VARIABLE, EvaluationContext, PreviousAnswer},
};

/// A number directly followed by `%`.
static PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)%").expect("PERCENTAGE pattern compiles")
});

/// Characters that continue the previous answer when they start a line.
pub const CHAIN_OPERATORS: &[char] = &['+', '-', '*', '/'];

/// Rewrites percent literals as divisions by 100.
///
/// # Example
/// ```
/// use calcpad::sheet::preprocess::expand_percentages;
///
/// assert_eq!(expand_percentages("200 * 50%"), "200 * (50/100)");
/// assert_eq!(expand_percentages("12.5% + 1%"), "(12.5/100) + (1/100)");
/// assert_eq!(expand_percentages("10 % 3"), "10 % 3");
/// ```
#[must_use]
pub fn expand_percentages(line: &str) -> String {
    PERCENTAGE.replace_all(line, "($1/100)").into_owned()
}

/// Prefixes a line starting with an operator with the previous raw answer.
///
/// # Example
/// ```
/// use calcpad::{
///     interpreter::value::core::Number,
///     sheet::{context::PreviousAnswer, preprocess::apply_chaining},
/// };
///
/// let previous = PreviousAnswer { value: Number::from_f64(100.0),
///                                 raw:   "100".to_string(), };
///
/// assert_eq!(apply_chaining("* (80/100)", Some(&previous)), "100* (80/100)");
/// assert_eq!(apply_chaining("* 2", None), "* 2");
/// assert_eq!(apply_chaining("x * 2", Some(&previous)), "x * 2");
/// ```
#[must_use]
pub fn apply_chaining(line: &str, previous: Option<&PreviousAnswer>) -> String {
    match previous {
        Some(previous) if line.starts_with(CHAIN_OPERATORS) => format!("{}{line}", previous.raw),
        _ => line.to_string(),
    }
}

/// Turns a trimmed line into the expression handed to the engine.
///
/// Percent literals are expanded, a leading operator chains onto the previous
/// answer, `ans` is bound to the previous answer and non-ASCII identifiers
/// are replaced by their aliases, in that order.
pub fn prepare_line(line: &str, context: &mut EvaluationContext) -> String {
    let expanded = expand_percentages(line);
    let chained = apply_chaining(&expanded, context.previous_answer.as_ref());

    if let Some(previous) = &context.previous_answer {
        context.scope
               .set(ANSWER_VARIABLE, Value::Number(previous.value.clone()));
    }

    context.aliases.substitute(&chained)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::value::core::Number;

    #[test]
    fn percentage_pattern_compiles() {
        assert!(PERCENTAGE.is_match("50%"));
        assert!(!PERCENTAGE.is_match("10 % 3"));
    }

    #[test]
    fn chained_percentage() {
        let mut context = EvaluationContext::new();
        context.remember(Number::from_f64(100.0), "100".to_string());

        assert_eq!(prepare_line("* 80%", &mut context), "100* (80/100)");
        assert!(context.scope.contains("ans"));
    }

    #[test]
    fn no_ans_without_previous_answer() {
        let mut context = EvaluationContext::new();
        assert_eq!(prepare_line("- 5", &mut context), "- 5");
        assert!(!context.scope.contains("ans"));
    }

    #[test]
    fn aliases_apply_after_chaining() {
        let mut context = EvaluationContext::new();
        context.remember(Number::from_f64(2.0), "2".to_string());

        assert_eq!(prepare_line("+ 税", &mut context), "2+ _v0");
    }
}
