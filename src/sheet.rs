/// Aliases for non-ASCII identifiers.
///
/// The engine only lexes ASCII identifiers, so names such as `房租` are
/// replaced with synthetic names like `_v0` before evaluation. The mapping is
/// stable for one pass over a document.
pub mod alias;
/// Line classification.
///
/// Decides whether a line is empty, a comment, a separator, prose or an
/// expression to evaluate.
pub mod classify;
/// Per-pass evaluation state.
pub mod context;
/// The document evaluation loop.
///
/// Walks a document line by line, threading variables, aliases and the
/// previous answer from one line to the next, and records one
/// [`result::LineResult`] per line.
///
/// # Responsibilities
/// - Classifies and preprocesses each line before it reaches the engine.
/// - Converts engine failures into per-line errors without stopping the pass.
/// - Logs failures through `tracing`.
pub mod driver;
/// Plain-text export of a document with its results.
pub mod export;
/// Presentation formatting of raw results.
///
/// Trims trailing zeros and adds thousands separators.
pub mod format;
/// Line preprocessing: percentages, chaining, `ans` and aliases.
pub mod preprocess;
/// Per-line results.
pub mod result;
