/// Core parsing logic.
///
/// Walks a token stream on a single precedence level, collecting at most two
/// operands and one binary operator, and recurses into bracketed groups.
pub mod core;

/// Literal conversion.
///
/// Turns binary, decimal and hexadecimal literal tokens into `i64` values.
pub mod literal;
