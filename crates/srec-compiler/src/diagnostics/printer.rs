//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};

use super::Diagnostic;

/// Renders a [`Diagnostic`] against the pattern it was reported for.
pub struct DiagnosticPrinter<'d, 's> {
    diagnostic: &'d Diagnostic,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticPrinter<'d, 's> {
    pub fn new(diagnostic: &'d Diagnostic, source: &'s str) -> Self {
        Self {
            diagnostic,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let diag = self.diagnostic;
        let source = self.source;

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = adjust_range(diag.range.clone(), source.len());
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&diag.message));

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        for related in &diag.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(related.range.clone(), source.len()))
                    .label(&related.message),
            );
        }

        let mut report: Vec<Group> = vec![Level::ERROR.primary_title(&diag.message).element(snippet)];

        if let Some(fix) = &diag.fix {
            report.push(
                Level::HELP.secondary_title(&fix.description).element(
                    Snippet::source(source)
                        .line_start(1)
                        .patch(Patch::new(fix.range.clone(), &fix.replacement)),
                ),
            );
        }

        write!(w, "{}", renderer.render(&report))?;

        if let Some(hint) = diag.hint() {
            write!(w, "\n  = help: {hint}")?;
        }
        Ok(())
    }
}

/// Widens an empty range to one character so the caret is visible.
fn adjust_range(range: Range<usize>, limit: usize) -> Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}
