use thiserror::Error;

/// Configuration errors.
///
/// Raised while reading settings from the environment, before any
/// expression is evaluated.
pub mod config_error;
/// Parsing errors.
///
/// Defines all error types that can occur while classifying characters,
/// tokenizing, or building the expression tree. Parse errors include illegal
/// characters, unrecognized literals, unmatched brackets and malformed
/// operator/operand combinations.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a tree whose shape breaks the
/// operation invariants.
pub mod runtime_error;

pub use config_error::ConfigError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The phase-specific cause of an [`ExpressionError`].
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Tokenizing or parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluating the parsed tree failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// An error tied to the expression text that produced it.
///
/// Every failure returned by the crate's entry points carries the original
/// expression so a caller processing a batch can report which one failed.
#[derive(Debug, Error)]
#[error("Invalid expression '{expression}': {kind}")]
pub struct ExpressionError {
    /// The expression text as it was passed in.
    pub expression: String,
    /// What went wrong.
    #[source]
    pub kind:       ErrorKind,
}

impl ExpressionError {
    /// Attaches `expression` to a phase error.
    pub fn new(expression: impl Into<String>, kind: impl Into<ErrorKind>) -> Self {
        Self { expression: expression.into(),
               kind:       kind.into(), }
    }

    /// The parse error, if this failure happened before evaluation.
    #[must_use]
    pub const fn parse_error(&self) -> Option<&ParseError> {
        match &self.kind {
            ErrorKind::Parse(e) => Some(e),
            ErrorKind::Runtime(_) => None,
        }
    }

    /// The runtime error, if this failure happened during evaluation.
    #[must_use]
    pub const fn runtime_error(&self) -> Option<&RuntimeError> {
        match &self.kind {
            ErrorKind::Runtime(e) => Some(e),
            ErrorKind::Parse(_) => None,
        }
    }
}
