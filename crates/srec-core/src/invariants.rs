//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{State, StateGraph, StateGraphBuilder, StateId};

impl StateGraph {
    pub(crate) fn ensure_state(&self, id: StateId) -> &State {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "StateGraph: {id} not found in a graph of {} states \
                 (state IDs are only valid for the graph that produced them)",
                self.len()
            )
        })
    }
}

impl StateGraphBuilder {
    pub(crate) fn ensure_allocated(&self, id: StateId) {
        assert!(
            id.index() < self.states.len(),
            "StateGraphBuilder: {id} was never allocated"
        );
    }

    pub(crate) fn ensure_allocated_mut(&mut self, id: StateId) -> &mut State {
        let len = self.states.len();
        self.states
            .get_mut(id.index())
            .unwrap_or_else(|| panic!("StateGraphBuilder: {id} was never allocated ({len} states)"))
    }
}
