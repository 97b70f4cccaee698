use std::{fmt, iter::Peekable, ops::Range};

use logos::{Logos, SpannedIter};
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{lexer::Lexeme, parser::core::ParseResult},
    util::num::{is_binary_literal, is_decimal_literal, is_hex_literal},
};

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input.
    End,
    /// `|`, `or`, `bitor`.
    Or,
    /// `&`, `and`, `bitand`.
    And,
    /// `^`, `xor`, `bitxor`.
    Xor,
    /// `~`, `!`, `not`, `bitnot`.
    Negate,
    /// The raw text between a matched pair of brackets.
    Enclosed,
    /// A binary literal such as `0b1010`.
    Binary,
    /// A decimal literal such as `42` or `-7`.
    Decimal,
    /// A hexadecimal literal such as `0x1F` or `FF`.
    Hexadecimal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::End => "End",
            Self::Or => "OR",
            Self::And => "AND",
            Self::Xor => "XOR",
            Self::Negate => "NOT",
            Self::Enclosed => "Bracket Content",
            Self::Binary => "Binary",
            Self::Decimal => "Decimal",
            Self::Hexadecimal => "Hexadecimal",
        };
        f.write_str(name)
    }
}

/// A classified run of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the text represents.
    pub kind: TokenKind,
    /// The matched text. For [`TokenKind::Enclosed`] this excludes the
    /// brackets themselves.
    pub text:     String,
    /// Byte offset of `text` in the whole expression, including the text of
    /// any enclosing brackets.
    pub position: usize,
}

impl Token {
    /// Creates a token from its kind and matched text, at position 0.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into(),
               position: 0 }
    }

    /// Moves the token to byte offset `position`.
    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// The token that terminates every token stream.
    #[must_use]
    pub const fn end() -> Self {
        Self { kind:     TokenKind::End,
               text:     String::new(),
               position: 0, }
    }
}

/// Word spellings of the operators, matched after lowercasing and stripping
/// an optional `bit` prefix.
const WORD_OPERATORS: [(&str, TokenKind); 4] = [("or", TokenKind::Or),
                                                ("and", TokenKind::And),
                                                ("xor", TokenKind::Xor),
                                                ("not", TokenKind::Negate)];

/// Shortest word that may spell an operator (`or`).
const MIN_WORD_LEN: usize = 2;
/// Longest word that may spell an operator (`bitand`, `bitxor`, `bitnot`).
const MAX_WORD_LEN: usize = 6;

/// Returns the operator spelled by `word`, if any.
///
/// Matching is case-insensitive and ignores a leading `bit`, so `AND`,
/// `bitand` and `BitAnd` are all [`TokenKind::And`].
fn word_operator(word: &str) -> Option<TokenKind> {
    if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()) {
        return None;
    }
    let lower = word.to_ascii_lowercase();
    let stem = lower.strip_prefix("bit").unwrap_or(&lower);
    WORD_OPERATORS.iter()
                  .find(|(spelling, _)| *spelling == stem)
                  .map(|(_, kind)| *kind)
}

/// Classifies a numeral run as a binary, decimal or hexadecimal literal, in
/// that order of priority.
fn numeral_kind(text: &str) -> ParseResult<TokenKind> {
    if is_binary_literal(text) {
        Ok(TokenKind::Binary)
    } else if is_decimal_literal(text) {
        Ok(TokenKind::Decimal)
    } else if is_hex_literal(text) {
        Ok(TokenKind::Hexadecimal)
    } else {
        Err(ParseError::InvalidLiteral { literal: text.to_string() })
    }
}

/// Single-pass tokenizer over one expression.
///
/// Characters are classified by the [`Lexeme`] lexer and grouped into
/// [`Token`]s. The tokenizer holds one lexeme of lookahead, which is enough
/// to end word and numeral runs without consuming the character after them.
///
/// Positions in tokens and errors are offsets from `origin`, which is the
/// byte offset of `source` inside the whole expression.
pub struct Tokenizer<'src> {
    source:  &'src str,
    origin:  usize,
    lexemes: Peekable<SpannedIter<'src, Lexeme>>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over a whole expression.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_origin(source, 0)
    }

    /// Creates a tokenizer over text that starts `origin` bytes into the
    /// expression, such as the contents of a bracketed group.
    #[must_use]
    pub fn with_origin(source: &'src str, origin: usize) -> Self {
        Self { source,
               origin,
               lexemes: Lexeme::lexer(source).spanned().peekable() }
    }

    fn token(&self, kind: TokenKind, span: Range<usize>) -> Token {
        let position = self.origin + span.start;
        Token::new(kind, &self.source[span]).at(position)
    }

    fn peek(&mut self) -> Option<(Lexeme, Range<usize>)> {
        self.lexemes
            .peek()
            .map(|(lexeme, span)| ((*lexeme).unwrap_or(Lexeme::Invalid), span.clone()))
    }

    fn advance(&mut self) -> Option<(Lexeme, Range<usize>)> {
        self.lexemes
            .next()
            .map(|(lexeme, span)| (lexeme.unwrap_or(Lexeme::Invalid), span))
    }

    /// Consumes lexemes while `accept` holds and returns the byte offset just
    /// past the last one consumed.
    fn consume_while(&mut self, mut end: usize, accept: impl Fn(Lexeme) -> bool) -> usize {
        while let Some((lexeme, span)) = self.peek()
              && accept(lexeme)
        {
            end = span.end;
            self.lexemes.next();
        }
        end
    }

    fn illegal_character(&self, span: Range<usize>) -> ParseError {
        let character = self.source
                            .get(span.start..)
                            .and_then(|rest| rest.chars().next())
                            .unwrap_or('\0');
        ParseError::IllegalCharacter { character,
                                       position: self.origin + span.start }
    }

    /// Produces the next token, or [`TokenKind::End`] once the input is
    /// exhausted.
    ///
    /// # Errors
    /// - `IllegalCharacter` for characters outside the alphabet, including
    ///   batch separators.
    /// - `InvalidLiteral` for numeral runs that match no base.
    /// - `UnmatchedBracket` for an unclosed `(` or a stray `)`.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        self.consume_while(0, |lexeme| lexeme == Lexeme::Whitespace);

        let Some((lexeme, span)) = self.advance() else {
            return Ok(Token::end().at(self.origin + self.source.len()));
        };

        match lexeme {
            Lexeme::Or => Ok(self.token(TokenKind::Or, span)),
            Lexeme::And => Ok(self.token(TokenKind::And, span)),
            Lexeme::Xor => Ok(self.token(TokenKind::Xor, span)),
            Lexeme::Negate => Ok(self.token(TokenKind::Negate, span)),
            Lexeme::Letter => self.word(span),
            Lexeme::Digit | Lexeme::Period | Lexeme::Subtract => self.numeral(span),
            Lexeme::BracketOpen => self.enclosed(span),
            Lexeme::BracketClose => Err(ParseError::UnmatchedBracket { bracket:  ')',
                                                                       position: self.origin
                                                                                 + span.start, }),
            Lexeme::Separator | Lexeme::Invalid => Err(self.illegal_character(span)),
            Lexeme::Whitespace | Lexeme::End => self.next_token(),
        }
    }

    /// Scans a run of letters and digits. Operator words become operator
    /// tokens, anything else is treated as a numeral (hex literals may start
    /// with a letter).
    fn word(&mut self, first: Range<usize>) -> ParseResult<Token> {
        let end = self.consume_while(first.end, Lexeme::continues_word);
        let word = &self.source[first.start..end];

        let kind = match word_operator(word) {
            Some(kind) => kind,
            None => numeral_kind(word)?,
        };
        Ok(self.token(kind, first.start..end))
    }

    fn numeral(&mut self, first: Range<usize>) -> ParseResult<Token> {
        let end = self.consume_while(first.end, Lexeme::continues_numeral);
        let kind = numeral_kind(&self.source[first.start..end])?;
        Ok(self.token(kind, first.start..end))
    }

    /// Captures everything up to the bracket matching the one at `open`.
    fn enclosed(&mut self, open: Range<usize>) -> ParseResult<Token> {
        let mut depth = 1usize;

        while let Some((lexeme, span)) = self.advance() {
            match lexeme {
                Lexeme::BracketOpen => depth += 1,
                Lexeme::BracketClose => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(self.token(TokenKind::Enclosed, open.end..span.start));
                    }
                },
                _ => {},
            }
        }

        Err(ParseError::UnmatchedBracket { bracket:  '(',
                                           position: self.origin + open.start, })
    }
}

/// Splits one expression into tokens, ending with a [`TokenKind::End`] token.
///
/// # Errors
/// Fails on the first illegal character, unrecognized literal or unmatched
/// bracket.
///
/// ## Example
/// ```
/// use bitexpr::interpreter::tokenizer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("~0x1F bitand (1|2)").unwrap()
///                                                   .into_iter()
///                                                   .map(|t| t.kind)
///                                                   .collect();
/// assert_eq!(kinds,
///            [TokenKind::Negate,
///             TokenKind::Hexadecimal,
///             TokenKind::And,
///             TokenKind::Enclosed,
///             TokenKind::End]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    tokenize_at(source, 0)
}

/// Splits text that starts `origin` bytes into an expression into tokens.
///
/// Token and error positions count from the start of the whole expression,
/// so an error inside a bracketed group points at the right character.
///
/// # Errors
/// Same as [`tokenize`].
///
/// ## Example
/// ```
/// use bitexpr::{error::ParseError, interpreter::tokenizer::tokenize_at};
///
/// assert_eq!(tokenize_at("2 $ 3", 5).unwrap_err(),
///            ParseError::IllegalCharacter { character: '$',
///                                           position:  7, });
/// ```
pub fn tokenize_at(source: &str, origin: usize) -> ParseResult<Vec<Token>> {
    let mut tokenizer = Tokenizer::with_origin(source, origin);
    let mut tokens = Vec::new();

    loop {
        let token = tokenizer.next_token()?;
        let done = token.kind == TokenKind::End;
        tokens.push(token);
        if done {
            break;
        }
    }

    trace!(source, origin, count = tokens.len(), "tokenized expression");
    Ok(tokens)
}
