//! Tracing for graph construction.
//!
//! The compiler reports every grammar rule it enters and every state,
//! transition and accept mark it creates. `NoopCompileTracer` compiles all of
//! that away; `PrintCompileTracer` collects formatted lines for the CLI.

use srec_core::{Colors, StateId, SymbolSet, Verbosity};

use crate::lexer::TokenKind;

/// Instrumentation hooks called by the compiler.
pub trait CompileTracer {
    /// Called on entry to a grammar rule with the current lookahead.
    fn trace_rule(&mut self, rule: &'static str, lookahead: TokenKind);

    /// Called after a state is allocated.
    fn trace_state(&mut self, id: StateId);

    /// Called after a transition is appended.
    fn trace_connect(&mut self, from: StateId, to: StateId, symbols: &SymbolSet);

    /// Called when a state is marked accept.
    fn trace_accept(&mut self, id: StateId);
}

impl<T: CompileTracer + ?Sized> CompileTracer for &mut T {
    #[inline(always)]
    fn trace_rule(&mut self, rule: &'static str, lookahead: TokenKind) {
        (**self).trace_rule(rule, lookahead);
    }

    #[inline(always)]
    fn trace_state(&mut self, id: StateId) {
        (**self).trace_state(id);
    }

    #[inline(always)]
    fn trace_connect(&mut self, from: StateId, to: StateId, symbols: &SymbolSet) {
        (**self).trace_connect(from, to, symbols);
    }

    #[inline(always)]
    fn trace_accept(&mut self, id: StateId) {
        (**self).trace_accept(id);
    }
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopCompileTracer;

impl CompileTracer for NoopCompileTracer {
    #[inline(always)]
    fn trace_rule(&mut self, _rule: &'static str, _lookahead: TokenKind) {}

    #[inline(always)]
    fn trace_state(&mut self, _id: StateId) {}

    #[inline(always)]
    fn trace_connect(&mut self, _from: StateId, _to: StateId, _symbols: &SymbolSet) {}

    #[inline(always)]
    fn trace_accept(&mut self, _id: StateId) {}
}

/// Tracer that collects construction steps as text lines.
#[derive(Debug, Default)]
pub struct PrintCompileTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintCompileTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }
}

impl CompileTracer for PrintCompileTracer {
    fn trace_rule(&mut self, rule: &'static str, lookahead: TokenKind) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        self.lines
            .push(format!("  {}{rule:<11} {lookahead}{}", c.dim, c.reset));
    }

    fn trace_state(&mut self, id: StateId) {
        let c = self.colors;
        self.lines.push(format!("  new    {}{id}{}", c.blue, c.reset));
    }

    fn trace_connect(&mut self, from: StateId, to: StateId, symbols: &SymbolSet) {
        let c = self.colors;
        self.lines.push(format!(
            "  edge   {}{from}{} -> {}{to}{} on {}{symbols}{}",
            c.blue, c.reset, c.blue, c.reset, c.green, c.reset
        ));
    }

    fn trace_accept(&mut self, id: StateId) {
        let c = self.colors;
        self.lines
            .push(format!("  accept {}{id}{}", c.blue, c.reset));
    }
}
