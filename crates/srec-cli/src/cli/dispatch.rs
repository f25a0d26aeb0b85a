//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Positional shifting (`-f` turns the pattern positional into a text)

use std::path::PathBuf;

use clap::ArgMatches;
use srec_lib::Verbosity;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::matching::MatchArgs;
use crate::commands::run_common::PatternSource;
use crate::commands::trace::TraceArgs;

pub struct MatchParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub texts: Vec<String>,
    pub full: bool,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_file = m.get_one::<PathBuf>("pattern_file").cloned();
        let mut pattern = m.get_one::<String>("pattern").cloned();
        let mut texts: Vec<String> = m
            .get_many::<String>("texts")
            .map(|v| v.cloned().collect())
            .unwrap_or_default();

        // With -f, every positional is a text.
        if pattern_file.is_some()
            && let Some(first) = pattern.take()
        {
            texts.insert(0, first);
        }

        Self {
            pattern,
            pattern_file,
            texts,
            full: m.get_flag("full"),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            source: PatternSource::new(p.pattern, p.pattern_file),
            texts: p.texts,
            full: p.full,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source: PatternSource::new(p.pattern, p.pattern_file),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub json: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            source: PatternSource::new(p.pattern, p.pattern_file),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub text: Option<String>,
    pub full: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_file = m.get_one::<PathBuf>("pattern_file").cloned();
        let pattern = m.get_one::<String>("pattern").cloned();
        let text = m.get_one::<String>("text").cloned();

        // Positional shifting: with -f, a single positional is the text.
        let (pattern, text) = shift_positional_to_text(pattern_file.is_some(), pattern, text);

        Self {
            pattern,
            pattern_file,
            text,
            full: m.get_flag("full"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            source: PatternSource::new(p.pattern, p.pattern_file),
            text: p.text,
            full: p.full,
            verbosity: Verbosity::from_count(p.verbose),
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// When -f is used with a single positional arg, shift it from pattern to text.
/// This enables: `srec trace -f pattern.txt abc`
fn shift_positional_to_text(
    has_pattern_file: bool,
    pattern: Option<String>,
    text: Option<String>,
) -> (Option<String>, Option<String>) {
    if has_pattern_file && pattern.is_some() && text.is_none() {
        (None, pattern)
    } else {
        (pattern, text)
    }
}
