use logos::Logos;

/// The semantic category of a single input character.
///
/// Every variant except `End` and `Invalid` matches exactly one character, so
/// running the lexer over a string yields one lexeme per character. `End` is
/// produced by the tokenizer when the input runs out and `Invalid` stands in
/// for any character the lexer rejects.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// `|`
    #[token("|")]
    Or,
    /// `&`
    #[token("&")]
    And,
    /// `^`
    #[token("^")]
    Xor,
    /// `~` or `!`
    #[token("~")]
    #[token("!")]
    Negate,
    /// `0` through `9`.
    #[regex("[0-9]")]
    Digit,
    /// `.`
    #[token(".")]
    Period,
    /// `-`
    #[token("-")]
    Subtract,
    /// `(`
    #[token("(")]
    BracketOpen,
    /// `)`
    #[token(")")]
    BracketClose,
    /// ASCII letters and underscores.
    #[regex("[a-zA-Z_]")]
    Letter,
    /// `,` or `;`, used to delimit expressions in a batch.
    #[token(",")]
    #[token(";")]
    Separator,
    /// Spaces, tabs, line feeds, carriage returns and vertical tabs.
    #[regex(r"[ \t\n\r\x0B]")]
    Whitespace,
    /// End of input.
    End,
    /// Anything else.
    Invalid,
}

impl Lexeme {
    /// Whether this lexeme may continue a numeral run.
    #[must_use]
    pub const fn continues_numeral(self) -> bool {
        matches!(self, Self::Digit | Self::Letter | Self::Period | Self::Subtract)
    }

    /// Whether this lexeme may continue a word run.
    #[must_use]
    pub const fn continues_word(self) -> bool {
        matches!(self, Self::Letter | Self::Digit)
    }
}

/// Maps a single character to its [`Lexeme`].
///
/// Total and pure: characters outside the expression alphabet map to
/// [`Lexeme::Invalid`] instead of failing.
///
/// ## Example
/// ```
/// use bitexpr::interpreter::lexer::{Lexeme, classify};
///
/// assert_eq!(classify('7'), Lexeme::Digit);
/// assert_eq!(classify('!'), Lexeme::Negate);
/// assert_eq!(classify('$'), Lexeme::Invalid);
/// ```
#[must_use]
pub fn classify(c: char) -> Lexeme {
    let mut buf = [0; 4];
    Lexeme::lexer(c.encode_utf8(&mut buf)).next()
                                          .and_then(Result::ok)
                                          .unwrap_or(Lexeme::Invalid)
}
