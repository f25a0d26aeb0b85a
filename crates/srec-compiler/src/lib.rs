//! srec compiler: lexer, recursive-descent graph construction, diagnostics.
//!
//! This crate turns pattern text into a [`StateGraph`]:
//! - `lexer` - logos-based tokenizer
//! - `compile` - single-pass parser that wires the graph as it parses
//! - `diagnostics` - error locations and rendering
//! - `trace` - construction tracing

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod diagnostics;
pub mod lexer;
pub mod trace;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod lib_tests;

use srec_core::StateGraph;

pub use compile::{ClassBuilder, Compiler, CompilerBuilder};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticPrinter};
pub use trace::{CompileTracer, NoopCompileTracer, PrintCompileTracer};

/// The two ways a pattern can fail to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character that is not part of the pattern language.
    Lex,
    /// Tokens that do not form a pattern.
    Parse,
}

/// Errors that can occur while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("lex error: {}", .0.message())]
    Lex(Diagnostic),

    #[error("parse error: {}", .0.message())]
    Parse(Diagnostic),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(_) => ErrorKind::Lex,
            Error::Parse(_) => ErrorKind::Parse,
        }
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            Error::Lex(d) | Error::Parse(d) => d,
        }
    }

    /// Render against the pattern that failed to compile.
    pub fn render(&self, source: &str) -> String {
        self.diagnostic().render(source)
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.diagnostic().render_colored(source, colored)
    }
}

/// Result type for compile operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile `source` into a state graph.
pub fn compile(source: &str) -> Result<StateGraph> {
    Compiler::builder(source).build()?.compile()
}

/// Compile `source`, reporting every construction step to `tracer`.
pub fn compile_traced<T: CompileTracer>(source: &str, tracer: &mut T) -> Result<StateGraph> {
    Compiler::builder(source).tracer(tracer).build()?.compile()
}
