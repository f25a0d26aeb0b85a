use super::*;

#[test]
fn fallback_messages() {
    insta::assert_snapshot!(
        DiagnosticKind::ExpectedAtom.message(None),
        @"expected a character, `.` or `[`"
    );
    insta::assert_snapshot!(
        DiagnosticKind::UnmatchedClassClose.message(None),
        @"unmatched `]`"
    );
}

#[test]
fn detail_is_substituted() {
    insta::assert_snapshot!(
        DiagnosticKind::NothingToRepeat.message(Some("`*`")),
        @"quantifier `*` has nothing to repeat"
    );
    insta::assert_snapshot!(
        DiagnosticKind::ExpectedClassMember.message(Some("`.`")),
        @"expected a character inside `[...]`, found `.`"
    );
}

#[test]
fn only_unrecognized_input_is_a_lex_error() {
    assert!(DiagnosticKind::UnrecognizedInput.is_lex_error());
    assert!(!DiagnosticKind::UnclosedClass.is_lex_error());
    assert!(!DiagnosticKind::NothingToRepeat.is_lex_error());
}

#[test]
fn display_includes_related() {
    let diag = Diagnostic::with_default_message(DiagnosticKind::UnclosedClass, 3..3)
        .related_to("class opened here", 0..1);
    insta::assert_snapshot!(
        diag.to_string(),
        @"error at 3..3: unclosed character class (class opened here at 0..1)"
    );
}

#[test]
fn accessors() {
    let diag = Diagnostic::new(DiagnosticKind::NothingToRepeat, 0..1, "custom");
    assert_eq!(diag.kind(), DiagnosticKind::NothingToRepeat);
    assert_eq!(diag.range(), 0..1);
    assert_eq!(diag.message(), "custom");
    assert!(diag.related().is_empty());
    assert!(diag.hint().is_none());
}

#[test]
fn render_points_at_source() {
    let diag = Diagnostic::with_default_message(DiagnosticKind::UnmatchedClassClose, 2..3);
    let out = diag.render("ab]");

    assert!(out.contains("error: unmatched `]`"), "{out}");
    assert!(out.contains("ab]"), "{out}");
    assert!(out.contains('^'), "{out}");
}

#[test]
fn render_includes_related_and_hint() {
    let diag = Diagnostic::new(DiagnosticKind::UnrecognizedInput, 1..2, "unrecognized character `$`")
        .related_to("pattern starts here", 0..1);
    let out = diag.render("a$");

    assert!(out.contains("pattern starts here"), "{out}");
    assert!(out.ends_with(
        "= help: patterns use letters, digits, `_`, `.`, `*`, `+`, `?` and `[...]`"
    ));
}

#[test]
fn render_fix_suggestion() {
    let diag = Diagnostic::with_default_message(DiagnosticKind::UnclosedClass, 3..3)
        .fix(Fix::new(3..3, "]", "close the class"));
    let out = diag.render("[ab");

    assert!(out.contains("help: close the class"), "{out}");
}

#[test]
fn render_plain_has_no_escapes() {
    let diag = Diagnostic::with_default_message(DiagnosticKind::NothingToRepeat, 0..1);
    let plain = diag.render_colored("*", false);
    assert!(!plain.contains('\x1b'));
}

#[test]
fn render_colored_has_escapes() {
    let diag = Diagnostic::with_default_message(DiagnosticKind::UnmatchedClassClose, 0..1);
    let colored = diag.render_colored("]", true);
    assert!(colored.contains('\x1b'));
}
