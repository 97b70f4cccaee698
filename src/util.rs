/// Literal recognition and radix conversion.
///
/// This module decides whether a run of characters is a binary, decimal or
/// hexadecimal literal and converts validated literal text to an `i64`
/// without silent overflow.
pub mod num;
/// Rendering results in a chosen numeral base.
pub mod format;
