use crate::{Compiler, DiagnosticKind, ErrorKind, NoopCompileTracer, compile};

#[test]
fn unrecognized_character_is_a_lex_error() {
    let err = compile("$").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err.diagnostic().kind(), DiagnosticKind::UnrecognizedInput);
    insta::assert_snapshot!(err, @"lex error: unrecognized character `$`");
}

#[test]
fn lex_errors_win_over_parse_errors() {
    let err = compile("[a b").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lex);
}

#[test]
fn unterminated_class_is_a_parse_error() {
    let err = compile("[").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    insta::assert_snapshot!(err, @"parse error: unclosed character class");
}

#[test]
fn builder_with_explicit_tracer() {
    let mut tracer = NoopCompileTracer;
    let graph = Compiler::builder("ab")
        .tracer(&mut tracer)
        .build()
        .unwrap()
        .compile()
        .unwrap();
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.transition_count(), 2);
}

#[test]
fn builder_keeps_source() {
    let compiler = Compiler::builder("a+").build().unwrap();
    assert_eq!(compiler.source(), "a+");
}

#[test]
fn render_uses_diagnostic() {
    let err = compile("a]").unwrap_err();
    let out = err.render("a]");
    assert!(out.contains("unmatched `]`"), "{out}");
}
