use crate::diagnostics::DiagnosticKind;
use crate::lexer::{TokenKind, lex, token_text};

fn snapshot(input: &str) -> String {
    let tokens = lex(input).expect("pattern should lex");
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{:?} {:?}\n",
            token.kind,
            token_text(input, &token)
        ));
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot(".*+?[]"), @r#"
    Wildcard "."
    Star "*"
    Plus "+"
    Question "?"
    ClassOpen "["
    ClassClose "]"
    "#);
}

#[test]
fn characters_are_single_tokens() {
    insta::assert_snapshot!(snapshot("a1_"), @r#"
    Char "a"
    Char "1"
    Char "_"
    "#);
}

#[test]
fn class_with_quantifier() {
    insta::assert_snapshot!(snapshot("[ab]+c?"), @r#"
    ClassOpen "["
    Char "a"
    Char "b"
    ClassClose "]"
    Plus "+"
    Char "c"
    Question "?"
    "#);
}

#[test]
fn unicode_letters_are_characters() {
    insta::assert_snapshot!(snapshot("é٣²"), @r#"
    Char "é"
    Char "٣"
    Char "²"
    "#);
}

#[test]
fn combining_mark_is_unrecognized() {
    let diag = lex("a\u{345}b").unwrap_err();
    assert_eq!(diag.kind(), DiagnosticKind::UnrecognizedInput);
    assert_eq!(diag.range(), 1..3);
}

#[test]
fn empty_pattern_has_no_tokens() {
    assert!(lex("").unwrap().is_empty());
}

#[test]
fn spans_are_byte_offsets() {
    let tokens = lex("éa").unwrap();
    assert_eq!(tokens[0].span, 0..2);
    assert_eq!(tokens[1].span, 2..3);
}

#[test]
fn unrecognized_character() {
    let diag = lex("a$b").unwrap_err();
    assert_eq!(diag.kind(), DiagnosticKind::UnrecognizedInput);
    assert_eq!(diag.range(), 1..2);
    insta::assert_snapshot!(diag.message(), @"unrecognized character `$`");
}

#[test]
fn unrecognized_run_is_coalesced() {
    let diag = lex("ab$%").unwrap_err();
    assert_eq!(diag.range(), 2..4);
    insta::assert_snapshot!(diag.message(), @"unrecognized characters `$%`");
}

#[test]
fn whitespace_is_not_part_of_the_language() {
    let diag = lex("a b").unwrap_err();
    assert_eq!(diag.range(), 1..2);
    insta::assert_snapshot!(diag.message(), @"unrecognized character ` `");
}

#[test]
fn token_kind_helpers() {
    assert!(TokenKind::Star.is_quantifier());
    assert!(TokenKind::Question.is_quantifier());
    assert!(!TokenKind::Char.is_quantifier());
    assert!(TokenKind::ClassOpen.starts_atom());
    assert!(TokenKind::Wildcard.starts_atom());
    assert!(!TokenKind::ClassClose.starts_atom());
    assert!(!TokenKind::Eoi.starts_atom());
}
