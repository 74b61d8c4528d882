use tracing::{debug, trace};

use crate::{
    interpreter::{
        evaluate,
        value::{core::Value, format::Notation},
    },
    sheet::{classify::classify, context::EvaluationContext, preprocess::prepare_line, result::LineResult},
};

/// Evaluates every line of a document with the default notation.
///
/// The result has one entry per `\n`-separated line, in order.
///
/// # Example
/// ```
/// use calcpad::sheet::{driver::evaluate_document, result::LineResult};
///
/// let results = evaluate_document("1 + 2\n* 3\nsome notes");
///
/// assert_eq!(results[0].raw(), Some("3"));
/// assert_eq!(results[1].raw(), Some("9"));
/// assert_eq!(results[2], LineResult::Blank);
/// ```
#[must_use]
pub fn evaluate_document(document: &str) -> Vec<LineResult> {
    evaluate_document_with(document, &Notation::default())
}

/// Evaluates every line of a document, rendering results with `notation`.
///
/// Each call starts from an empty context: variables, aliases and the
/// previous answer never carry over between calls. A line that fails to
/// evaluate yields [`LineResult::Error`] and evaluation continues with the
/// next line.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = document.len()))]
#[must_use]
pub fn evaluate_document_with(document: &str, notation: &Notation) -> Vec<LineResult> {
    let mut context = EvaluationContext::with_notation(*notation);

    let results: Vec<LineResult> = document.split('\n')
                                           .enumerate()
                                           .map(|(index, line)| {
                                               evaluate_line(index + 1, line.trim(), &mut context)
                                           })
                                           .collect();

    debug!(lines = results.len(),
           errors = results.iter().filter(|r| r.is_error()).count(),
           "document evaluated");
    results
}

/// Evaluates one trimmed line against the pass context.
///
/// `number` is the 1-based line number, used for logging only.
pub fn evaluate_line(number: usize, line: &str, context: &mut EvaluationContext) -> LineResult {
    let kind = classify(line, context);
    trace!(line = number, ?kind, "classified");
    if kind.is_blank() {
        return LineResult::Blank;
    }

    let expression = prepare_line(line, context);
    match evaluate(&expression, &mut context.scope) {
        Ok(Value::Number(value)) => {
            let raw = value.to_auto_string(&context.notation);
            let approx = value.to_f64().unwrap_or(0.0);
            context.remember(value, raw.clone());
            LineResult::Display { raw, approx }
        },
        Ok(Value::Bool(_)) => LineResult::Blank,
        Err(error) => {
            debug!(line = number, %expression, %error, "line failed to evaluate");
            LineResult::Error
        },
    }
}
