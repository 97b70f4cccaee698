//! # bitexpr
//!
//! bitexpr is a bitwise expression calculator written in Rust.
//! It tokenizes, parses and evaluates expressions such as `~0x1F & (5 | 0b10)`
//! over 64-bit signed integers, and evaluates batches of independent
//! expressions separated by `,` or `;`.

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

use tracing::{debug, debug_span};

use crate::{
    ast::Operation,
    error::ExpressionError,
    interpreter::{batch::split_batch, parser::core::parse as parse_tokens, tokenizer::tokenize},
};

/// Defines the expression tree.
///
/// This module declares the `Operation` node, its `Operator` and the
/// `Operand` slots that hold literals or owned sub-trees. The tree is built by
/// the parser, evaluated by the evaluator and rendered back to text through
/// `Display`.
pub mod ast;
/// Settings for the command-line front end.
///
/// Holds the log level and output base, read from the environment and
/// overridden by command-line flags.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression, plus the wrapper that attaches the
/// offending expression text.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (tokenizer, parser,
///   evaluator, configuration).
/// - Carries positions and offending text for context.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together character classification, tokenizing, parsing,
/// evaluation and batch splitting.
///
/// # Responsibilities
/// - Coordinates the lexer, tokenizer, parser and evaluator.
/// - Splits batched input into independent expressions.
pub mod interpreter;
/// Structured logging setup.
pub mod logging;
/// General utilities for literals and number formatting.
///
/// # Responsibilities
/// - Recognize and convert binary, decimal and hexadecimal literals.
/// - Render results in decimal, hexadecimal, octal or binary.
pub mod util;

/// One successfully evaluated expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The expression text as it was given.
    pub expression: String,
    /// The parsed tree.
    pub operation:  Operation,
    /// The computed value.
    pub result:     i64,
}

/// Tokenizes and parses a single expression.
///
/// # Errors
/// Returns an error naming `source` if tokenizing or parsing fails.
///
/// ## Examples
/// ```
/// use bitexpr::parse;
///
/// let operation = parse("5 AND (3 bitor 8)").unwrap();
/// assert_eq!(operation.to_string(), "5 & (3 | 8)");
/// ```
pub fn parse(source: &str) -> Result<Operation, ExpressionError> {
    let operation = tokenize(source).and_then(|tokens| parse_tokens(&tokens))
                                    .map_err(|e| ExpressionError::new(source, e))?;
    debug!(source, operation = %operation, "parsed expression");
    Ok(operation)
}

/// Parses and evaluates a single expression.
///
/// # Errors
/// Returns an error naming `source` if tokenizing, parsing or evaluation
/// fails.
///
/// ## Examples
/// ```
/// use bitexpr::parse_eval;
///
/// assert_eq!(parse_eval("5 & 3").unwrap(), 1);
/// assert_eq!(parse_eval("~0").unwrap(), -1);
/// assert_eq!(parse_eval("(5 & 3) | 8").unwrap(), 9);
///
/// // Two operators on one level must be grouped with brackets.
/// assert!(parse_eval("5 & 3 | 2").is_err());
/// ```
pub fn parse_eval(source: &str) -> Result<i64, ExpressionError> {
    evaluate(source).map(|evaluation| evaluation.result)
}

/// Parses and evaluates a single expression, keeping the parsed tree.
///
/// # Errors
/// Returns an error naming `source` if tokenizing, parsing or evaluation
/// fails.
pub fn evaluate(source: &str) -> Result<Evaluation, ExpressionError> {
    let _span = debug_span!("evaluate", source).entered();
    let operation = parse(source)?;
    let result = operation.result()
                          .map_err(|e| ExpressionError::new(source, e))?;
    debug!(source, result, "evaluated expression");

    Ok(Evaluation { expression: source.to_string(),
                    operation,
                    result })
}

/// Splits `fragments` into expressions and evaluates each one independently.
///
/// A failing expression does not stop the others; its slot holds the error.
///
/// ## Examples
/// ```
/// use bitexpr::evaluate_batch;
///
/// let results: Vec<_> = evaluate_batch(["5&3,", "6|2;", "1&"]).into_iter()
///                                                             .map(|r| r.map(|e| e.result).ok())
///                                                             .collect();
/// assert_eq!(results, [Some(1), Some(6), None]);
/// ```
pub fn evaluate_batch<I, S>(fragments: I) -> Vec<Result<Evaluation, ExpressionError>>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    split_batch(fragments).iter()
                          .map(|expression| evaluate(expression))
                          .collect()
}
