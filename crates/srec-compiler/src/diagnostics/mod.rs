//! Compile diagnostics: what went wrong, where, and how to render it.

mod printer;

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::Range;

pub use printer::DiagnosticPrinter;

/// Concrete failure causes, grouped by the phase that reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    // Lexer
    UnrecognizedInput,

    // Parser: user omitted something required
    ExpectedAtom,
    ExpectedClassMember,
    UnclosedClass,

    // Parser: user wrote something that doesn't belong
    NothingToRepeat,
    UnmatchedClassClose,
}

impl DiagnosticKind {
    pub fn is_lex_error(&self) -> bool {
        matches!(self, Self::UnrecognizedInput)
    }

    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnrecognizedInput => {
                Some("patterns use letters, digits, `_`, `.`, `*`, `+`, `?` and `[...]`")
            }
            Self::ExpectedClassMember => Some("classes list literal characters, e.g. `[abc]`"),
            _ => None,
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnrecognizedInput => "unrecognized character",
            Self::ExpectedAtom => "expected a character, `.` or `[`",
            Self::ExpectedClassMember => "expected a character inside `[...]`",
            Self::UnclosedClass => "unclosed character class",
            Self::NothingToRepeat => "quantifier has nothing to repeat",
            Self::UnmatchedClassClose => "unmatched `]`",
        }
    }

    /// Message with `detail` substituted into the kind's template.
    pub fn message(&self, detail: Option<&str>) -> String {
        let Some(detail) = detail else {
            return self.fallback_message().to_string();
        };
        match self {
            Self::NothingToRepeat => format!("quantifier {detail} has nothing to repeat"),
            _ => format!("{}, found {detail}", self.fallback_message()),
        }
    }
}

/// Replacement text offered alongside a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub(crate) range: Range<usize>,
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(
        range: Range<usize>,
        replacement: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            range,
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: Range<usize>,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

/// A single compile failure located in the pattern source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    pub(crate) range: Range<usize>,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
            fix: None,
        }
    }

    /// Diagnostic carrying the kind's default message.
    pub fn with_default_message(kind: DiagnosticKind, range: Range<usize>) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn related_to(mut self, message: impl Into<String>, range: Range<usize>) -> Self {
        self.related.push(RelatedInfo::new(range, message));
        self
    }

    pub fn fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.kind.default_hint()
    }

    pub fn printer<'d, 's>(&'d self, source: &'s str) -> DiagnosticPrinter<'d, 's> {
        DiagnosticPrinter::new(self, source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer(source).colored(colored).render()
    }
}

/// Plain one-line form: `error at 3..4: unmatched `]``.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            self.range.start, self.range.end, self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " ({} at {}..{})",
                related.message, related.range.start, related.range.end
            )?;
        }
        Ok(())
    }
}
