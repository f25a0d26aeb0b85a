//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("srec")
        .about("Compile small patterns to state graphs and match text against them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(match_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
}

/// Match texts against a pattern.
pub fn match_command() -> Command {
    Command::new("match")
        .about("Match texts against a pattern, printing true or false for each")
        .override_usage(
            "\
  srec match <PATTERN> [TEXT]...
  srec match -f <FILE> [TEXT]...",
        )
        .after_help(
            r#"EXAMPLES:
  srec match 'ab?c' abc ac abbc     # prefix match, one line per text
  srec match --full 'a+' aaa ''     # whole text must match
  printf 'x\ny\n' | srec match '.'  # texts from stdin
  srec match -f pattern.txt abc     # pattern from a file"#,
        )
        .arg(pattern_arg())
        .arg(texts_arg())
        .arg(pattern_file_arg())
        .arg(full_arg())
        .arg(color_arg())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check a pattern for errors")
        .after_help(
            r#"EXAMPLES:
  srec check 'a[bc]+'       # silent on success
  srec check -f pattern.txt"#,
        )
        .arg(pattern_arg())
        .arg(pattern_file_arg())
        .arg(color_arg())
}

/// Show the compiled state graph.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the state graph a pattern compiles to")
        .after_help(
            r#"EXAMPLES:
  srec dump 'ab?c'
  srec dump --json 'a+'"#,
        )
        .arg(pattern_arg())
        .arg(pattern_file_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Trace compilation and one match.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace graph construction and a match step by step")
        .override_usage(
            "\
  srec trace <PATTERN> <TEXT>
  srec trace -f <FILE> <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  srec trace 'a?b' b
  srec trace --full -vv '[ab]+' abba"#,
        )
        .arg(pattern_arg())
        .arg(text_arg())
        .arg(pattern_file_arg())
        .arg(full_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}
