#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for srec state graphs.
//!
//! A compiled pattern is a graph of states stored in a flat arena and
//! addressed by [`StateId`]. Each state owns an ordered list of
//! [`Transition`]s, and each transition carries the [`SymbolSet`] of input
//! characters that fire it. Cycles (self-loops, shared successors) are plain
//! indices, so the graph has a single owner and no reference cycles.
//!
//! Graphs are built with [`StateGraphBuilder`] and frozen into an immutable
//! [`StateGraph`] once construction is finished.

mod colors;
mod dump;
mod graph;
mod invariants;
mod symbols;

#[cfg(test)]
mod graph_tests;

pub use colors::Colors;
pub use dump::GraphPrinter;
pub use graph::{State, StateGraph, StateGraphBuilder, StateId, Transition};
pub use symbols::SymbolSet;

/// Verbosity level for trace output.
///
/// Shared by the compile tracer and the match tracer so the CLI can use a
/// single `-v` flag for both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Graph construction steps and match steps.
    #[default]
    Default,
    /// Also grammar rule entries.
    Verbose,
    /// Also one line per state entered during a walk.
    VeryVerbose,
}

impl Verbosity {
    /// Map a `-v` occurrence count to a level.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        }
    }
}
