//! Graph walker and its tracing hooks.

mod matcher;
mod trace;


pub use matcher::{Match, MatchMode, Matcher};
pub use trace::{NoopTracer, PrintTracer, Tracer};
