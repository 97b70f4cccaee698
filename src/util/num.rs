/// Prefix marking a binary literal.
pub const BINARY_PREFIX: &str = "0b";
/// Prefix marking a hexadecimal literal.
pub const HEX_PREFIX: &str = "0x";

/// Returns `true` for `0b` followed by one or more `0`/`1` digits.
///
/// Unprefixed runs of ones and zeros are left to the decimal check, so `10`
/// means ten.
///
/// ## Example
/// ```
/// use bitexpr::util::num::is_binary_literal;
///
/// assert!(is_binary_literal("0b101"));
/// assert!(!is_binary_literal("101"));
/// assert!(!is_binary_literal("0b"));
/// ```
#[must_use]
pub fn is_binary_literal(text: &str) -> bool {
    text.strip_prefix(BINARY_PREFIX)
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b == b'0' || b == b'1'))
}

/// Returns `true` for an optional leading `-`, decimal digits and at most one
/// `.`, with at least one digit.
#[must_use]
pub fn is_decimal_literal(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0;
    let mut periods = 0;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => periods += 1,
            _ => return false,
        }
    }
    digits > 0 && periods <= 1
}

/// Returns `true` for an optional `0x` followed by one or more hex digits.
#[must_use]
pub fn is_hex_literal(text: &str) -> bool {
    let digits = text.strip_prefix(HEX_PREFIX).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Converts unsigned digits in `radix` to an `i64`.
///
/// Up to 64 bits are accepted; values above `i64::MAX` wrap to the negative
/// number with the same two's complement bit pattern, so `0xFFFFFFFFFFFFFFFF`
/// is `-1`. Returns `None` if the digits need more than 64 bits or are not
/// valid in `radix`.
///
/// ## Example
/// ```
/// use bitexpr::util::num::parse_unsigned_radix;
///
/// assert_eq!(parse_unsigned_radix("1F", 16), Some(31));
/// assert_eq!(parse_unsigned_radix("FFFFFFFFFFFFFFFF", 16), Some(-1));
/// assert_eq!(parse_unsigned_radix("1FFFFFFFFFFFFFFFF", 16), None);
/// ```
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn parse_unsigned_radix(digits: &str, radix: u32) -> Option<i64> {
    if digits.starts_with('+') {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|v| v as i64)
}

/// Converts a validated decimal literal to an `i64`, truncating any
/// fractional part toward zero.
///
/// An empty integer part (`.5`, `-.5`) is zero. Returns `None` if the integer
/// part does not fit in an `i64`.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<i64> {
    let integer = text.split('.').next().unwrap_or_default();
    match integer {
        "" | "-" => Some(0),
        _ => integer.parse().ok(),
    }
}
