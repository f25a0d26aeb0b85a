//! One method per grammar rule.
//!
//! The tail-recursive rules (`TailOpt`, `Run`, `ListBodyTail`) are loops.

use super::Compiler;
use super::construct::ClassBuilder;
use crate::diagnostics::{Diagnostic, DiagnosticKind, Fix};
use crate::lexer::TokenKind;
use crate::trace::CompileTracer;
use crate::{Error, Result};

impl<T: CompileTracer> Compiler<'_, T> {
    /// `Pattern := Atom TailOpt`
    pub(super) fn pattern(&mut self) -> Result<()> {
        self.tracer.trace_rule("pattern", self.current());
        loop {
            self.atom()?;
            if !self.current().starts_atom() {
                return Ok(());
            }
        }
    }

    /// `Atom := (CHAR | WILDCARD | '[' ListBody ']') AtomSuffix`
    fn atom(&mut self) -> Result<()> {
        self.tracer.trace_rule("atom", self.current());
        self.element()?;
        self.atom_suffix()
    }

    /// `AtomSuffix := Quantifier | Run`
    fn atom_suffix(&mut self) -> Result<()> {
        self.tracer.trace_rule("atom_suffix", self.current());
        if self.current().is_quantifier() {
            self.quantifier()
        } else {
            self.run()
        }
    }

    /// `Run := (CHAR | WILDCARD | '[' ListBody ']') Run | Quantifier | ε`
    fn run(&mut self) -> Result<()> {
        self.tracer.trace_rule("run", self.current());
        loop {
            match self.current() {
                kind if kind.starts_atom() => self.element()?,
                kind if kind.is_quantifier() => return self.quantifier(),
                _ => return Ok(()),
            }
        }
    }

    /// `Quantifier := '*' | '+' | '?'`
    ///
    /// The atom before it already shaped its transitions from lookahead, so
    /// the quantifier itself only needs consuming.
    fn quantifier(&mut self) -> Result<()> {
        self.tracer.trace_rule("quantifier", self.current());
        self.bump();
        if self.current().is_quantifier() {
            return Err(self.error_found(DiagnosticKind::NothingToRepeat));
        }
        Ok(())
    }

    /// A literal, wildcard or class, wired into the graph.
    fn element(&mut self) -> Result<()> {
        match self.current() {
            TokenKind::Char | TokenKind::Wildcard => {
                let symbols = self.current_symbols();
                let lookahead = self.nth(1);
                self.bump();
                self.emit_atom(symbols, lookahead);
                Ok(())
            }
            TokenKind::ClassOpen => self.class(),
            _ => Err(self.unexpected()),
        }
    }

    /// `'[' ListBody ']'`
    fn class(&mut self) -> Result<()> {
        self.tracer.trace_rule("class", self.current());
        let open = self.current_span();
        self.bump();

        let mut members = ClassBuilder::new();
        self.list_body(&mut members)?;

        if self.current() != TokenKind::ClassClose {
            if !self.at_end() {
                return Err(self.error_found(DiagnosticKind::ExpectedClassMember));
            }
            let end = self.source.len();
            return Err(Error::Parse(
                Diagnostic::with_default_message(DiagnosticKind::UnclosedClass, end..end)
                    .related_to("class opened here", open)
                    .fix(Fix::new(end..end, "]", "close the class")),
            ));
        }

        let lookahead = self.nth(1);
        self.bump();
        self.emit_atom(members.finish(), lookahead);
        Ok(())
    }

    /// `ListBody := CHAR ListBodyTail`
    fn list_body(&mut self, members: &mut ClassBuilder) -> Result<()> {
        self.tracer.trace_rule("list_body", self.current());
        match self.current() {
            TokenKind::Char => {}
            TokenKind::Eoi => return Ok(()),
            TokenKind::ClassClose => return Err(self.error(DiagnosticKind::ExpectedClassMember)),
            _ => return Err(self.error_found(DiagnosticKind::ExpectedClassMember)),
        }
        while self.current() == TokenKind::Char {
            members.extend(self.current_text().chars());
            self.bump();
        }
        Ok(())
    }

    /// Anything left after a complete pattern is an error.
    pub(super) fn expect_end(&self) -> Result<()> {
        if self.at_end() {
            return Ok(());
        }
        Err(self.unexpected())
    }
}
