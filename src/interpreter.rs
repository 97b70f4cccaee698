/// The batch module splits input fragments into independent expressions.
///
/// Several expressions can be packed into one input by ending a fragment with
/// `,` or `;`. Each resulting expression is tokenized, parsed and evaluated on
/// its own.
pub mod batch;
/// The evaluator module computes the value of an operation tree.
///
/// # Responsibilities
/// - Resolves literal and nested operands.
/// - Applies AND, OR, XOR and NOT.
/// - Rejects trees whose shape breaks the operation invariants.
pub mod evaluator;
/// The lexer module classifies single characters.
///
/// Every character of the input maps to a [`lexer::Lexeme`] such as a digit,
/// a letter, a bracket or an operator symbol. The tokenizer consumes these
/// lexemes instead of raw characters.
pub mod lexer;
/// The parser module builds an operation tree from tokens.
///
/// # Responsibilities
/// - Collects operands and the operator of one precedence level.
/// - Recursively parses bracketed groups.
/// - Reports structural mistakes such as extra operators or operands.
pub mod parser;
/// The tokenizer module groups lexemes into tokens.
///
/// # Responsibilities
/// - Recognizes operator symbols and operator words.
/// - Classifies numerals as binary, decimal or hexadecimal.
/// - Captures bracketed groups as single tokens.
/// - Reports illegal characters and unmatched brackets.
pub mod tokenizer;
