//! Matching engine for compiled srec patterns.
//!
//! This crate walks a [`srec_core::StateGraph`] over input text. Walks are
//! deterministic: at every state the first transition that fires on the
//! next character is taken, so no backtracking is ever needed.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{Match, MatchMode, Matcher, NoopTracer, PrintTracer, Tracer};
