//! # calcpad
//!
//! calcpad is a line-oriented notepad calculator written in Rust.
//! It evaluates a free-form text document line by line, with implicit
//! chaining, an `ans` variable, percent literals and variables whose names
//! may use any script.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of one line as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches byte offsets to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating a line. Errors never escape a document pass; the line driver
/// logs them and records a failed line.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
pub mod error;
/// The arithmetic engine.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to evaluate one statement against a variable scope.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, and value types.
/// - Provides the `parse` and `evaluate` entry points.
pub mod interpreter;
/// Document-level evaluation.
///
/// Turns a multi-line document into one result per line and formats and
/// exports those results.
pub mod sheet;
/// General numeric helpers.
///
/// This module provides the decimal and `f64` conversions and the
/// working-precision rules used throughout the evaluator.
pub mod util;

pub use interpreter::{
    evaluator::core::Scope,
    value::{
        core::{Number, Value},
        format::Notation,
    },
};
pub use sheet::{
    driver::{evaluate_document, evaluate_document_with},
    export::export_document,
    format::format_display,
    result::LineResult,
};
