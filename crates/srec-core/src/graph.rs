//! Arena-backed state graph.
//!
//! States are stored in a `Vec` and referenced by [`StateId`]. A state's
//! transitions are kept in insertion order: the matcher takes the first
//! transition whose symbol set contains the next input character, so the
//! order decides which edge wins when sets overlap.

use std::fmt;

use serde::Serialize;

use super::symbols::SymbolSet;

/// Index into the state arena.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
    /// Every graph starts at the first state allocated.
    pub const START: StateId = StateId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        let raw = u32::try_from(index).unwrap_or_else(|_| panic!("state arena overflow"));
        StateId(raw)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Weighted edge to another state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    target: StateId,
    symbols: SymbolSet,
}

impl Transition {
    pub fn target(&self) -> StateId {
        self.target
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    #[inline]
    pub fn fires_on(&self, c: char) -> bool {
        self.symbols.contains(c)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct State {
    pub(crate) transitions: Vec<Transition>,
    pub(crate) accept: bool,
}

impl State {
    /// Outgoing transitions in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn is_accept(&self) -> bool {
        self.accept
    }

    /// First transition that fires on `c`.
    #[inline]
    pub fn next(&self, c: char) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.fires_on(c))
    }
}

/// Immutable state graph produced by [`StateGraphBuilder::finish`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateGraph {
    pub(crate) states: Vec<State>,
}

impl StateGraph {
    pub fn start(&self) -> StateId {
        StateId::START
    }

    /// State by ID. Panics on an ID from another graph that is out of range.
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        self.ensure_state(id)
    }

    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: a graph has at least its start state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId::from_index(i), s))
    }

    pub fn accept_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.iter().filter(|(_, s)| s.is_accept()).map(|(id, _)| id)
    }

    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }
}

/// Mutable graph under construction.
///
/// The start state is allocated up front. States are only reachable through
/// the transitions the caller adds, so a builder that connects every state it
/// allocates yields a graph with no unreachable states.
#[derive(Debug)]
pub struct StateGraphBuilder {
    pub(crate) states: Vec<State>,
}

impl Default for StateGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StateGraphBuilder {
    pub fn new() -> Self {
        Self {
            states: vec![State::default()],
        }
    }

    pub fn start(&self) -> StateId {
        StateId::START
    }

    /// Allocate a fresh state with no transitions.
    pub fn add_state(&mut self) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(State::default());
        id
    }

    /// Append a transition `from -> to` firing on `symbols`.
    pub fn connect(&mut self, from: StateId, to: StateId, symbols: SymbolSet) {
        self.ensure_allocated(to);
        self.ensure_allocated_mut(from).transitions.push(Transition {
            target: to,
            symbols,
        });
    }

    pub fn mark_accept(&mut self, id: StateId) {
        self.ensure_allocated_mut(id).accept = true;
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Freeze into an immutable graph.
    pub fn finish(self) -> StateGraph {
        StateGraph {
            states: self.states,
        }
    }
}
