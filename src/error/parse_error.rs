use thiserror::Error;

/// Represents all errors that can occur during tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character outside the expression alphabet.
    #[error("Illegal character '{}' at position {position}.", .character.escape_debug())]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the tokenized text.
        position:  usize,
    },
    /// A numeral run that is not binary, decimal or hexadecimal.
    #[error("Input sequence \"{literal}\" is not a known operator or number.")]
    InvalidLiteral {
        /// The unrecognized text.
        literal: String,
    },
    /// A literal that does not fit in 64 bits.
    #[error("Literal \"{literal}\" is too large.")]
    LiteralTooLarge {
        /// The literal text.
        literal: String,
    },
    /// An opening bracket without a match, or a stray closing bracket.
    #[error("Unmatched bracket '{bracket}' at position {position}.")]
    UnmatchedBracket {
        /// The bracket that has no partner.
        bracket:  char,
        /// Byte offset of the bracket in the tokenized text.
        position: usize,
    },
    /// More than one binary operator on the same level.
    #[error("Too many operators. Use brackets to group additional operations.")]
    TooManyOperators,
    /// More than two operands on the same level.
    #[error("Too many operands. Ensure each operation has a clear beginning and end.")]
    TooManyOperands,
    /// A negation applied directly to a binary operator.
    #[error("Cannot negate operator {operator}.")]
    NegatedOperator {
        /// Spelling of the operator as written.
        operator: String,
    },
    /// Nothing to evaluate.
    #[error("No operator specified.")]
    MissingOperator,
    /// An operator without both of its operands, or a negation without one.
    #[error("Operation is missing an operand.")]
    IncompleteOperation,
    /// Brackets nested past the supported depth.
    #[error("Brackets are nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
    },
}
