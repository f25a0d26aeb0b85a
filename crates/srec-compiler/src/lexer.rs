//! Lexer for srec patterns.
//!
//! Produces span-based tokens without storing text. The literal text of a
//! token is sliced from the pattern only when needed.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters are coalesced into a single span and
//! reported as one lex error, so `a$%b` yields one diagnostic covering `$%`.

use std::fmt;
use std::ops::Range;

use logos::Logos;

use crate::diagnostics::{Diagnostic, DiagnosticKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Any letter, any number, or `_`. Combining marks are not characters.
    #[regex(r"[\p{L}\p{N}_]")]
    Char,

    #[token(".")]
    Wildcard,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token("[")]
    ClassOpen,

    #[token("]")]
    ClassClose,

    /// Never produced by the lexer: lookahead past the last token.
    Eoi,
}

impl TokenKind {
    #[inline]
    pub fn is_quantifier(self) -> bool {
        matches!(self, Self::Star | Self::Plus | Self::Question)
    }

    /// Tokens that can begin an atom.
    #[inline]
    pub fn starts_atom(self) -> bool {
        matches!(self, Self::Char | Self::Wildcard | Self::ClassOpen)
    }

    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Char => "a character",
            Self::Wildcard => "`.`",
            Self::Star => "`*`",
            Self::Plus => "`+`",
            Self::Question => "`?`",
            Self::ClassOpen => "`[`",
            Self::ClassClose => "`]`",
            Self::Eoi => "end of pattern",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes a pattern.
///
/// Fails on the first run of unrecognized characters.
pub fn lex(source: &str) -> Result<Vec<Token>, Diagnostic> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start {
                    return Err(unrecognized(source, start..lexer.span().start));
                }
                tokens.push(Token::new(kind, lexer.span()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start {
                    return Err(unrecognized(source, start..source.len()));
                }
                break;
            }
        }
    }

    Ok(tokens)
}

fn unrecognized(source: &str, range: Range<usize>) -> Diagnostic {
    let text = &source[range.clone()];
    let noun = if text.chars().count() == 1 {
        "character"
    } else {
        "characters"
    };
    Diagnostic::new(
        DiagnosticKind::UnrecognizedInput,
        range,
        format!("unrecognized {noun} `{}`", text.escape_debug()),
    )
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.clone()]
}
