//! Recursive-descent compiler from tokens to a state graph.
//!
//! Parsing and construction happen in a single pass. Each grammar rule is a
//! method on [`Compiler`]; when a rule recognises an atom it immediately wires
//! the atom into the graph, using one token of lookahead to decide how the
//! following quantifier shapes the transitions.
//!
//! # Grammar
//!
//! ```text
//! Pattern      := Atom TailOpt
//! TailOpt      := Pattern | ε
//! Atom         := (CHAR | WILDCARD | '[' ListBody ']') AtomSuffix
//! AtomSuffix   := Quantifier | Run
//! Run          := (CHAR | WILDCARD | '[' ListBody ']') Run | Quantifier | ε
//! Quantifier   := '*' | '+' | '?'
//! ListBody     := CHAR ListBodyTail
//! ListBodyTail := CHAR ListBodyTail | ε
//! ```
//!
//! The grammar is LL(1), so no rule ever backtracks.
//!
//! # Modules
//! - `core`: token cursor and error construction
//! - `grammar`: one method per grammar rule
//! - `construct`: graph wiring for quantified atoms

mod construct;
mod core;
mod grammar;


use indexmap::IndexSet;
use srec_core::{StateGraph, StateGraphBuilder, StateId};

use crate::Result;
use crate::lexer::{Token, lex};
use crate::trace::{CompileTracer, NoopCompileTracer};

pub use construct::ClassBuilder;

/// Single-pass pattern compiler.
///
/// Created through [`Compiler::builder`]; consumed by [`Compiler::compile`].
pub struct Compiler<'src, T: CompileTracer = NoopCompileTracer> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    graph: StateGraphBuilder,
    /// State the next atom's transition leaves from.
    cursor: StateId,
    /// Predecessor of the most recent optional atom, awaiting its bypass edge.
    optional_parent: Option<StateId>,
    /// States that become accepting if nothing mandatory follows them.
    skip_eligible: IndexSet<StateId>,
    tracer: T,
}

impl<'src> Compiler<'src> {
    pub fn builder(source: &'src str) -> CompilerBuilder<'src> {
        CompilerBuilder::new(source)
    }
}

impl<'src, T: CompileTracer> Compiler<'src, T> {
    /// Parse the whole token stream and freeze the resulting graph.
    ///
    /// No partial graph is returned on failure.
    pub fn compile(mut self) -> Result<StateGraph> {
        self.pattern()?;
        self.expect_end()?;
        Ok(self.finish())
    }

    pub fn source(&self) -> &'src str {
        self.source
    }
}

/// Builder for [`Compiler`].
pub struct CompilerBuilder<'src, T: CompileTracer = NoopCompileTracer> {
    source: &'src str,
    tracer: T,
}

impl<'src> CompilerBuilder<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tracer: NoopCompileTracer,
        }
    }
}

impl<'src, T: CompileTracer> CompilerBuilder<'src, T> {
    /// Replace the tracer. Pass `&mut tracer` to keep ownership.
    pub fn tracer<U: CompileTracer>(self, tracer: U) -> CompilerBuilder<'src, U> {
        CompilerBuilder {
            source: self.source,
            tracer,
        }
    }

    /// Tokenize the source and prepare the compiler.
    ///
    /// Fails with a lex error on unrecognized input.
    pub fn build(self) -> Result<Compiler<'src, T>> {
        let tokens = lex(self.source).map_err(crate::Error::Lex)?;
        let graph = StateGraphBuilder::new();
        let cursor = graph.start();
        Ok(Compiler {
            source: self.source,
            tokens,
            pos: 0,
            graph,
            cursor,
            optional_parent: None,
            skip_eligible: IndexSet::new(),
            tracer: self.tracer,
        })
    }
}
