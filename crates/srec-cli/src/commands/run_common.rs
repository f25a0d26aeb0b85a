//! Pattern loading and compilation shared by every command.

use std::path::PathBuf;

use srec_lib::{Automaton, CompileTracer, Error};

use super::pattern_loader::{LoadError, load_pattern};

/// Where a command's pattern comes from.
pub struct PatternSource {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

impl PatternSource {
    pub fn new(text: Option<String>, file: Option<PathBuf>) -> Self {
        Self { text, file }
    }

    /// `true` if the pattern will be read from stdin (`-f -`).
    pub fn reads_stdin(&self) -> bool {
        self.text.is_none() && self.file.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }

    pub fn load(&self) -> Result<String, LoadError> {
        load_pattern(self.text.as_deref(), self.file.as_deref())
    }

    /// Load the pattern, exiting with status 1 on failure.
    pub fn load_or_exit(&self) -> String {
        match self.load() {
            Ok(pattern) => pattern,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }

    /// Name shown in diagnostics.
    fn path_label(&self) -> Option<String> {
        if self.text.is_some() {
            return None;
        }
        match self.file.as_deref() {
            Some(p) if p.as_os_str() == "-" => Some("<stdin>".to_string()),
            Some(p) => Some(p.display().to_string()),
            None => None,
        }
    }

    /// Print a compile error against the pattern and exit with status 1.
    pub fn exit_with(&self, pattern: &str, error: &Error, color: bool) -> ! {
        let diagnostic = error.diagnostic();
        let label = self.path_label();
        let mut printer = diagnostic.printer(pattern).colored(color);
        if let Some(label) = label.as_deref() {
            printer = printer.path(label);
        }
        eprintln!("{}", printer.render());
        std::process::exit(1);
    }
}

/// Compile, exiting with a rendered diagnostic on failure.
pub fn compile_or_exit(source: &PatternSource, pattern: &str, color: bool) -> Automaton {
    match Automaton::compile(pattern) {
        Ok(automaton) => automaton,
        Err(e) => source.exit_with(pattern, &e, color),
    }
}

/// Like [`compile_or_exit`], reporting construction steps to `tracer`.
pub fn compile_traced_or_exit<T: CompileTracer>(
    source: &PatternSource,
    pattern: &str,
    tracer: &mut T,
    color: bool,
) -> Automaton {
    match Automaton::compile_traced(pattern, tracer) {
        Ok(automaton) => automaton,
        Err(e) => source.exit_with(pattern, &e, color),
    }
}
