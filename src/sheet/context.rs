use crate::{
    interpreter::{
        evaluator::core::Scope,
        value::{core::Number, format::Notation},
    },
    sheet::alias::AliasTable,
};

/// Name the previous answer is bound to before each evaluation.
pub const ANSWER_VARIABLE: &str = "ans";

/// The most recent numeric result of a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousAnswer {
    /// The exact value, bound to `ans`.
    pub value: Number,
    /// The auto-notation string, used as the left operand of chained lines.
    pub raw:   String,
}

/// State threaded through the lines of one document pass.
///
/// A context is created fresh for every pass and dropped at its end, so
/// nothing leaks from one evaluation of a document to the next.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    /// Variables assigned so far, keyed by ASCII name or alias.
    pub scope:           Scope,
    /// Last numeric result, if any line has produced one.
    pub previous_answer: Option<PreviousAnswer>,
    /// Aliases for non-ASCII identifiers.
    pub aliases:         AliasTable,
    /// How results are rendered to raw strings.
    pub notation:        Notation,
}

impl EvaluationContext {
    /// Creates an empty context using the default notation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty context rendering results with `notation`.
    #[must_use]
    pub fn with_notation(notation: Notation) -> Self {
        Self { notation,
               ..Self::default() }
    }

    /// Whether `name` is known as a variable or an aliased identifier.
    #[must_use]
    pub fn knows_name(&self, name: &str) -> bool {
        self.scope.contains(name) || self.aliases.contains(name)
    }

    /// Records a numeric result as the new previous answer.
    pub fn remember(&mut self, value: Number, raw: String) {
        self.previous_answer = Some(PreviousAnswer { value, raw });
    }
}
