//! Tracing infrastructure for debugging graph walks.
//!
//! When `NoopTracer` is used every hook is an `#[inline(always)]` empty
//! function, so an untraced walk carries no tracing cost. `PrintTracer`
//! collects one formatted line per event, filtered by [`Verbosity`].

use srec_core::{Colors, StateId, Verbosity};

/// Tracer trait for walk instrumentation.
///
/// Each method is called at a specific point during a walk:
/// - `trace_enter` - before examining a state
/// - `trace_step` - after a transition fires
/// - `trace_stuck` - when no transition fires on the next character
/// - `trace_exhausted` - when input ends in a non-accepting state
/// - `trace_accept` - when the walk succeeds
pub trait Tracer {
    fn trace_enter(&mut self, state: StateId, offset: usize);

    fn trace_step(&mut self, from: StateId, to: StateId, c: char);

    fn trace_stuck(&mut self, state: StateId, c: char);

    fn trace_exhausted(&mut self, state: StateId);

    fn trace_accept(&mut self, state: StateId, end: usize);
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _state: StateId, _offset: usize) {}

    #[inline(always)]
    fn trace_step(&mut self, _from: StateId, _to: StateId, _c: char) {}

    #[inline(always)]
    fn trace_stuck(&mut self, _state: StateId, _c: char) {}

    #[inline(always)]
    fn trace_exhausted(&mut self, _state: StateId) {}

    #[inline(always)]
    fn trace_accept(&mut self, _state: StateId, _end: usize) {}
}

/// Tracer that collects the walk as text lines.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, state: StateId, offset: usize) {
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        self.lines.push(format!(
            "  {}enter{}  {}{state}{} at {offset}",
            c.dim, c.reset, c.blue, c.reset
        ));
    }

    fn trace_step(&mut self, from: StateId, to: StateId, ch: char) {
        let c = self.colors;
        self.lines.push(format!(
            "  step   {}{from}{} -> {}{to}{} on {}{ch:?}{}",
            c.blue, c.reset, c.blue, c.reset, c.green, c.reset
        ));
    }

    fn trace_stuck(&mut self, state: StateId, ch: char) {
        let c = self.colors;
        self.lines.push(format!(
            "  {}stuck{}  {}{state}{} on {}{ch:?}{}",
            c.red, c.reset, c.blue, c.reset, c.red, c.reset
        ));
    }

    fn trace_exhausted(&mut self, state: StateId) {
        let c = self.colors;
        self.lines.push(format!(
            "  {}end{}    {}{state}{} {}(not accepting){}",
            c.red, c.reset, c.blue, c.reset, c.dim, c.reset
        ));
    }

    fn trace_accept(&mut self, state: StateId, end: usize) {
        let c = self.colors;
        self.lines.push(format!(
            "  {}accept{} {}{state}{} at {end}",
            c.green, c.reset, c.blue, c.reset
        ));
    }
}
