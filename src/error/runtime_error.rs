use thiserror::Error;

use crate::ast::Operator;

/// Represents all errors that can occur while evaluating an operation tree.
///
/// Trees produced by the parser never trigger these; they guard against
/// operations assembled by hand with an impossible shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The operator cannot be applied to the operands that are present.
    #[error("Invalid operator '{operator:?}': {details}.")]
    InvalidOperator {
        /// The operator of the malformed node.
        operator: Operator,
        /// What is wrong with the node.
        details:  String,
    },
    /// A required operand slot is empty.
    #[error("Cannot perform {operator:?} operation when an operand is missing.")]
    IncompleteOperation {
        /// The operator of the incomplete node.
        operator: Operator,
    },
}
