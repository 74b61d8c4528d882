use crate::sheet::context::EvaluationContext;

/// Characters a separator line may consist of.
pub const SEPARATOR_CHARS: &[char] = &['-', '=', '_', '.', '*', '·', '~'];

/// Characters that mark a line as an expression rather than prose.
const EXPRESSION_CHARS: &[char] = &['=', '(', ')', '^', '+', '-', '*', '/'];

/// Words that make a line an expression even without operators or digits.
const EXPRESSION_WORDS: &[&str] = &["pi", "e", "ans", "true", "false", "infinity"];

/// What a line is, as far as evaluation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Nothing but whitespace.
    Empty,
    /// Starts with `#`.
    Comment,
    /// Only separator characters, such as `-----` or `===`.
    Separator,
    /// Free text that is not an expression.
    Prose,
    /// Everything else; handed to the engine.
    Evaluate,
}

impl LineKind {
    /// Whether lines of this kind always produce a blank result.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        !matches!(self, Self::Evaluate)
    }
}

/// Classifies a trimmed line. The first matching kind wins.
///
/// # Example
/// ```
/// use calcpad::sheet::{
///     classify::{LineKind, classify},
///     context::EvaluationContext,
/// };
///
/// let context = EvaluationContext::new();
///
/// assert_eq!(classify("", &context), LineKind::Empty);
/// assert_eq!(classify("# groceries", &context), LineKind::Comment);
/// assert_eq!(classify("--==--", &context), LineKind::Separator);
/// assert_eq!(classify("abc", &context), LineKind::Prose);
/// assert_eq!(classify("Pi", &context), LineKind::Evaluate);
/// assert_eq!(classify("3 apples", &context), LineKind::Evaluate);
/// ```
#[must_use]
pub fn classify(line: &str, context: &EvaluationContext) -> LineKind {
    if line.is_empty() {
        LineKind::Empty
    } else if line.starts_with('#') {
        LineKind::Comment
    } else if line.chars().all(|c| SEPARATOR_CHARS.contains(&c)) {
        LineKind::Separator
    } else if is_prose(line, context) {
        LineKind::Prose
    } else {
        LineKind::Evaluate
    }
}

fn is_prose(line: &str, context: &EvaluationContext) -> bool {
    !context.knows_name(line)
    && !line.chars()
            .any(|c| c.is_ascii_digit() || EXPRESSION_CHARS.contains(&c))
    && !ascii_words(line).any(|word| {
                             EXPRESSION_WORDS.iter()
                                             .any(|keyword| word.eq_ignore_ascii_case(keyword))
                         })
}

/// Maximal runs of `[A-Za-z0-9_]`.
fn ascii_words(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::value::core::Value;

    #[test]
    fn whole_words_only() {
        let context = EvaluationContext::new();
        assert_eq!(classify("the answer", &context), LineKind::Prose);
        assert_eq!(classify("what is e", &context), LineKind::Evaluate);
        assert_eq!(classify("TRUE", &context), LineKind::Evaluate);
    }

    #[test]
    fn known_names_are_evaluated() {
        let mut context = EvaluationContext::new();
        assert_eq!(classify("rent", &context), LineKind::Prose);

        context.scope.set("rent", Value::from(1200));
        assert_eq!(classify("rent", &context), LineKind::Evaluate);

        context.aliases.alias("房租");
        assert_eq!(classify("房租", &context), LineKind::Evaluate);
    }

    #[test]
    fn separator_needs_only_separator_chars() {
        let context = EvaluationContext::new();
        assert_eq!(classify("~~~", &context), LineKind::Separator);
        assert_eq!(classify("···", &context), LineKind::Separator);
        assert_eq!(classify("- -", &context), LineKind::Evaluate);
        assert_eq!(classify("-x-", &context), LineKind::Evaluate);
    }
}
