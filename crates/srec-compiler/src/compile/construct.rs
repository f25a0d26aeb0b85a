//! Graph wiring for quantified atoms.
//!
//! Given an atom's symbol set and the token right after it:
//!
//! | lookahead | wiring                                                          |
//! |-----------|-----------------------------------------------------------------|
//! | `*`       | self-loop on the cursor, cursor stays                           |
//! | `+`       | new state with a self-loop, cursor -> new, cursor moves         |
//! | otherwise | new state, cursor -> new (plus bypass edge from a pending       |
//! |           | optional predecessor), cursor moves                             |
//!
//! An atom followed by `?` leaves its predecessor pending, so the next atom
//! wired through the last row gets an extra edge that skips it. `*` and `+`
//! atoms leave the pending predecessor in place. `?` also marks that predecessor
//! skip-eligible. Skip-eligible states become accepting at the end only if
//! no later atom cleared them.

use srec_core::{StateGraph, StateId, SymbolSet};

use super::Compiler;
use crate::lexer::TokenKind;
use crate::trace::CompileTracer;

/// Accumulates the members of a `[...]` group until it closes.
#[derive(Debug, Default)]
pub struct ClassBuilder {
    symbols: SymbolSet,
}

impl ClassBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.symbols.insert(c);
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Freeze into the symbol set of the class transition.
    pub fn finish(self) -> SymbolSet {
        self.symbols
    }
}

impl Extend<char> for ClassBuilder {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.push(c);
        }
    }
}

impl<T: CompileTracer> Compiler<'_, T> {
    /// Wire one atom matching `symbols` into the graph.
    pub(super) fn emit_atom(&mut self, symbols: SymbolSet, lookahead: TokenKind) {
        self.skip_eligible.clear();
        let from = self.cursor;

        match lookahead {
            TokenKind::Star => {
                self.connect(from, from, symbols);
            }
            TokenKind::Plus => {
                let repeat = self.add_state();
                self.connect(repeat, repeat, symbols.clone());
                self.connect(from, repeat, symbols);
                self.cursor = repeat;
            }
            _ => {
                let next = self.add_state();
                if let Some(parent) = self.optional_parent.take() {
                    self.connect(parent, next, symbols.clone());
                }
                self.connect(from, next, symbols);
                if lookahead == TokenKind::Question {
                    self.optional_parent = Some(from);
                    self.skip_eligible.insert(from);
                }
                self.cursor = next;
            }
        }
    }

    fn add_state(&mut self) -> StateId {
        let id = self.graph.add_state();
        self.tracer.trace_state(id);
        id
    }

    fn connect(&mut self, from: StateId, to: StateId, symbols: SymbolSet) {
        self.tracer.trace_connect(from, to, &symbols);
        self.graph.connect(from, to, symbols);
    }

    fn mark_accept(&mut self, id: StateId) {
        self.graph.mark_accept(id);
        self.tracer.trace_accept(id);
    }

    /// Mark the accepting states and freeze the graph.
    pub(super) fn finish(mut self) -> StateGraph {
        self.mark_accept(self.cursor);
        let skip_eligible = std::mem::take(&mut self.skip_eligible);
        for id in skip_eligible {
            self.mark_accept(id);
        }
        self.graph.finish()
    }
}
