//! Compiled pattern plus its query surface.

use std::str::FromStr;

use serde::Serialize;
use srec_compiler::{CompileTracer, Compiler, Result};
use srec_core::StateGraph;
use srec_vm::{Match, MatchMode, Matcher, Tracer};

/// A compiled pattern.
///
/// Immutable once built: every query takes `&self` and returns its result by
/// value, so one automaton can serve any number of threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Automaton {
    pattern: String,
    graph: StateGraph,
}

impl Automaton {
    pub fn compile(pattern: &str) -> Result<Self> {
        let graph = Compiler::builder(pattern).build()?.compile()?;
        Ok(Self::from_parts(pattern, graph))
    }

    /// Compile, reporting every construction step to `tracer`.
    pub fn compile_traced<T: CompileTracer>(pattern: &str, tracer: &mut T) -> Result<Self> {
        let graph = Compiler::builder(pattern)
            .tracer(tracer)
            .build()?
            .compile()?;
        Ok(Self::from_parts(pattern, graph))
    }

    fn from_parts(pattern: &str, graph: StateGraph) -> Self {
        Self {
            pattern: pattern.to_owned(),
            graph,
        }
    }

    /// Source text this automaton was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.graph)
    }

    /// Prefix check: `true` once any accepting state is reached, whatever
    /// input remains.
    pub fn is_match(&self, text: &str) -> bool {
        self.match_prefix(text).is_some()
    }

    /// `true` only if all of `text` is consumed and the walk ends accepting.
    pub fn is_full_match(&self, text: &str) -> bool {
        self.full_match(text).is_some()
    }

    pub fn match_prefix(&self, text: &str) -> Option<Match> {
        self.matcher().run(text, MatchMode::Prefix)
    }

    pub fn full_match(&self, text: &str) -> Option<Match> {
        self.matcher().run(text, MatchMode::Full)
    }

    pub fn run_traced<T: Tracer>(&self, text: &str, mode: MatchMode, tracer: &mut T) -> Option<Match> {
        self.matcher().run_with(text, mode, tracer)
    }

    /// Text dump of the state graph.
    pub fn dump(&self) -> String {
        self.graph.dump()
    }

    pub fn dump_colored(&self, colored: bool) -> String {
        self.graph.printer().colored(colored).dump()
    }
}

impl TryFrom<&str> for Automaton {
    type Error = srec_compiler::Error;

    fn try_from(pattern: &str) -> Result<Self> {
        Self::compile(pattern)
    }
}

impl TryFrom<&String> for Automaton {
    type Error = srec_compiler::Error;

    fn try_from(pattern: &String) -> Result<Self> {
        Self::compile(pattern.as_str())
    }
}

impl FromStr for Automaton {
    type Err = srec_compiler::Error;

    fn from_str(pattern: &str) -> Result<Self> {
        Self::compile(pattern)
    }
}
