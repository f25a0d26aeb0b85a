//! Text rendering of state graphs for inspection and testing.

use std::fmt::Write;

use super::colors::Colors;
use super::graph::StateGraph;

/// Printer for [`StateGraph`].
///
/// ```text
/// S0:
///   'a' -> S1
/// S1 (accept):
/// ```
pub struct GraphPrinter<'g> {
    graph: &'g StateGraph,
    colors: Colors,
}

impl<'g> GraphPrinter<'g> {
    pub fn new(graph: &'g StateGraph) -> Self {
        Self {
            graph,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        for (id, state) in self.graph.iter() {
            write!(w, "{}{}{}", c.blue, id, c.reset)?;
            if state.is_accept() {
                write!(w, " {}(accept){}", c.dim, c.reset)?;
            }
            writeln!(w, ":")?;

            for transition in state.transitions() {
                writeln!(
                    w,
                    "  {}{}{} -> {}{}{}",
                    c.green,
                    transition.symbols(),
                    c.reset,
                    c.blue,
                    transition.target(),
                    c.reset
                )?;
            }
        }
        Ok(())
    }
}

impl StateGraph {
    pub fn printer(&self) -> GraphPrinter<'_> {
        GraphPrinter::new(self)
    }

    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
