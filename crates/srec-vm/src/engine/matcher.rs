//! Deterministic walk of a state graph over input text.

use srec_core::{StateGraph, StateId};

use super::trace::{NoopTracer, Tracer};

/// How much of the input a walk must consume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Succeed at the first accepting state reached; the rest of the input
    /// is ignored.
    #[default]
    Prefix,
    /// Walk to the end of the input; succeed only if the walk ends in an
    /// accepting state.
    Full,
}

/// A successful walk.
///
/// Returned by value from every query, so concurrent walks over one graph
/// never share progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    end: usize,
    state: StateId,
}

impl Match {
    /// Byte offset just past the last consumed character.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Accepting state the walk stopped in.
    pub fn state(&self) -> StateId {
        self.state
    }

    /// `true` if the match consumed no input.
    pub fn is_empty(&self) -> bool {
        self.end == 0
    }
}

/// Walks a borrowed [`StateGraph`].
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'g> {
    graph: &'g StateGraph,
}

impl<'g> Matcher<'g> {
    pub fn new(graph: &'g StateGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g StateGraph {
        self.graph
    }

    pub fn run(&self, text: &str, mode: MatchMode) -> Option<Match> {
        self.run_with(text, mode, &mut NoopTracer)
    }

    /// Walk `text`, reporting each step to `tracer`.
    ///
    /// Never fails: the result is `None` when the walk gets stuck, when the
    /// input runs out before an accepting state, or (in `Full` mode) when
    /// the input ends in a non-accepting state.
    pub fn run_with<T: Tracer>(&self, text: &str, mode: MatchMode, tracer: &mut T) -> Option<Match> {
        let mut state = self.graph.start();

        for (offset, c) in text.char_indices() {
            tracer.trace_enter(state, offset);
            let current = self.graph.state(state);

            if mode == MatchMode::Prefix && current.is_accept() {
                tracer.trace_accept(state, offset);
                return Some(Match { end: offset, state });
            }

            let Some(transition) = current.next(c) else {
                tracer.trace_stuck(state, c);
                return None;
            };
            tracer.trace_step(state, transition.target(), c);
            state = transition.target();
        }

        let end = text.len();
        tracer.trace_enter(state, end);
        if self.graph.state(state).is_accept() {
            tracer.trace_accept(state, end);
            return Some(Match { end, state });
        }
        tracer.trace_exhausted(state);
        None
    }

    /// Prefix check: does some prefix of `text` reach an accepting state?
    pub fn is_match(&self, text: &str) -> bool {
        self.run(text, MatchMode::Prefix).is_some()
    }

    /// Does the whole of `text` end in an accepting state?
    pub fn is_full_match(&self, text: &str) -> bool {
        self.run(text, MatchMode::Full).is_some()
    }
}
