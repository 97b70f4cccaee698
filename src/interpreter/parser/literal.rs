use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        tokenizer::{Token, TokenKind},
    },
    util::num::{
        BINARY_PREFIX, HEX_PREFIX, is_binary_literal, is_decimal_literal, is_hex_literal,
        parse_decimal, parse_unsigned_radix,
    },
};

/// Converts a literal token to its value using the radix implied by its kind.
///
/// Binary and hexadecimal literals may use all 64 bits; decimal literals are
/// signed and lose any fractional part.
///
/// # Errors
/// - `LiteralTooLarge` if the value does not fit in 64 bits.
/// - `InvalidLiteral` if `token` is not a literal token or its text does not
///   match its kind.
///
/// ## Example
/// ```
/// use bitexpr::interpreter::{
///     parser::literal::literal_value,
///     tokenizer::{Token, TokenKind},
/// };
///
/// assert_eq!(literal_value(&Token::new(TokenKind::Binary, "0b101")).unwrap(), 5);
/// assert_eq!(literal_value(&Token::new(TokenKind::Hexadecimal, "ff")).unwrap(), 255);
/// assert_eq!(literal_value(&Token::new(TokenKind::Decimal, "-12")).unwrap(), -12);
/// ```
pub fn literal_value(token: &Token) -> ParseResult<i64> {
    let text = token.text.as_str();

    let value = match token.kind {
        TokenKind::Binary => {
            parse_unsigned_radix(text.strip_prefix(BINARY_PREFIX).unwrap_or(text), 2)
        },
        TokenKind::Decimal => parse_decimal(text),
        TokenKind::Hexadecimal => {
            parse_unsigned_radix(text.strip_prefix(HEX_PREFIX).unwrap_or(text), 16)
        },
        _ => return Err(ParseError::InvalidLiteral { literal: text.to_string() }),
    };

    value.ok_or_else(|| {
             if is_well_formed(token) {
                 ParseError::LiteralTooLarge { literal: text.to_string() }
             } else {
                 ParseError::InvalidLiteral { literal: text.to_string() }
             }
         })
}

/// Whether the token text matches its kind, so a failed conversion can only
/// mean overflow.
fn is_well_formed(token: &Token) -> bool {
    match token.kind {
        TokenKind::Binary => is_binary_literal(&token.text),
        TokenKind::Decimal => is_decimal_literal(&token.text),
        TokenKind::Hexadecimal => is_hex_literal(&token.text),
        _ => false,
    }
}
