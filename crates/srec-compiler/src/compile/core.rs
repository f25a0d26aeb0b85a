//! Token cursor and error construction.

use std::ops::Range;

use srec_core::SymbolSet;

use super::Compiler;
use crate::Error;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::lexer::{TokenKind, token_text};
use crate::trace::CompileTracer;

impl<T: CompileTracer> Compiler<'_, T> {
    /// Kind of the current token, `Eoi` past the end.
    #[inline]
    pub(super) fn current(&self) -> TokenKind {
        self.nth(0)
    }

    /// Kind of the token `n` positions ahead, `Eoi` past the end.
    #[inline]
    pub(super) fn nth(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eoi, |t| t.kind)
    }

    /// Span of the current token. Empty span at the end of the source past
    /// the last token.
    pub(super) fn current_span(&self) -> Range<usize> {
        match self.tokens.get(self.pos) {
            Some(t) => t.span.clone(),
            None => self.source.len()..self.source.len(),
        }
    }

    pub(super) fn current_text(&self) -> &str {
        match self.tokens.get(self.pos) {
            Some(t) => token_text(self.source, t),
            None => "",
        }
    }

    /// Symbols matched by the current `Char` or `Wildcard` token.
    pub(super) fn current_symbols(&self) -> SymbolSet {
        if self.current() == TokenKind::Wildcard {
            return SymbolSet::alphanumeric();
        }
        self.current_text().chars().collect()
    }

    #[inline]
    pub(super) fn bump(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub(super) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Error at the current token with the kind's default message.
    pub(super) fn error(&self, kind: DiagnosticKind) -> Error {
        Error::Parse(Diagnostic::with_default_message(kind, self.current_span()))
    }

    /// Error at the current token, naming what was found.
    pub(super) fn error_found(&self, kind: DiagnosticKind) -> Error {
        let found = self.current().describe();
        Error::Parse(Diagnostic::new(
            kind,
            self.current_span(),
            kind.message(Some(found)),
        ))
    }

    /// Parse error for a token that cannot start an atom.
    pub(super) fn unexpected(&self) -> Error {
        match self.current() {
            TokenKind::ClassClose => self.error(DiagnosticKind::UnmatchedClassClose),
            kind if kind.is_quantifier() => self.error_found(DiagnosticKind::NothingToRepeat),
            TokenKind::Eoi => self.error(DiagnosticKind::ExpectedAtom),
            _ => self.error_found(DiagnosticKind::ExpectedAtom),
        }
    }
}
