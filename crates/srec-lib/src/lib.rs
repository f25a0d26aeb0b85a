//! srec: a tiny pattern language compiled to a deterministic state graph.
//!
//! Patterns are built from literal characters (letters, digits, `_`), the
//! `.` wildcard (any ASCII letter or digit), bracket classes like `[abc]`,
//! and the quantifiers `*`, `+` and `?`.
//!
//! # Example
//!
//! ```
//! use srec_lib::Automaton;
//!
//! let ident = Automaton::compile("[abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_].*")
//!     .expect("valid pattern");
//!
//! // `.` covers letters and digits only, so the `_` stops a full match.
//! assert!(ident.is_match("My_Var1"));
//! assert!(!ident.is_full_match("My_Var1"));
//! assert!(ident.is_full_match("MyVar1"));
//! assert!(!ident.is_match("1abc"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod automaton;

#[cfg(test)]
mod automaton_tests;
#[cfg(test)]
mod properties_tests;

pub use automaton::Automaton;

pub use srec_compiler::{
    CompileTracer, Diagnostic, DiagnosticKind, Error, ErrorKind, NoopCompileTracer,
    PrintCompileTracer, Result,
};
pub use srec_core::{Colors, StateGraph, StateId, SymbolSet, Verbosity};
pub use srec_vm::{Match, MatchMode, NoopTracer, PrintTracer, Tracer};

/// Compile `pattern` into an [`Automaton`].
pub fn compile(pattern: &str) -> Result<Automaton> {
    Automaton::compile(pattern)
}
