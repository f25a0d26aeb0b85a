use indoc::indoc;

use crate::{
    Automaton, Colors, ErrorKind, MatchMode, PrintCompileTracer, PrintTracer, Verbosity, compile,
};

#[test]
fn keeps_pattern_text() {
    let a = compile("a[bc]+").unwrap();
    assert_eq!(a.pattern(), "a[bc]+");
    assert_eq!(a.graph().len(), 3);
}

#[test]
fn conversions_agree() {
    let pattern = String::from("ab?c*");
    let a = Automaton::compile(&pattern).unwrap();
    let b = Automaton::try_from(pattern.as_str()).unwrap();
    let c = Automaton::try_from(&pattern).unwrap();
    let d: Automaton = pattern.parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c, d);
}

#[test]
fn conversions_report_errors() {
    let err = "a b".parse::<Automaton>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lex);
    let err = Automaton::try_from("a**").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn match_offsets() {
    let a = compile("ab*").unwrap();
    assert_eq!(a.match_prefix("abbbx").map(|m| m.end()), Some(1));
    assert_eq!(a.full_match("abbb").map(|m| m.end()), Some(4));
    assert_eq!(a.full_match("abbbx"), None);
}

#[test]
fn dump() {
    let a = compile("a?b").unwrap();
    assert_eq!(
        a.dump(),
        indoc! {"
            S0:
              'a' -> S1
              'b' -> S2
            S1:
              'b' -> S2
            S2 (accept):
        "}
    );
}

#[test]
fn dump_colored() {
    let a = compile("a").unwrap();
    assert!(a.dump_colored(true).contains("\x1b[34mS0\x1b[0m"));
    assert_eq!(a.dump_colored(false), a.dump());
}

#[test]
fn serializes_to_json() {
    let a = compile("a+").unwrap();
    let json = serde_json::to_string(&a).unwrap();
    insta::assert_snapshot!(json, @r#"{"pattern":"a+","graph":{"states":[{"transitions":[{"target":1,"symbols":"a"}],"accept":false},{"transitions":[{"target":1,"symbols":"a"}],"accept":true}]}}"#);
}

#[test]
fn traced_compile_and_run() {
    let mut compile_tracer = PrintCompileTracer::new(Verbosity::Default, Colors::OFF);
    let a = Automaton::compile_traced("ab", &mut compile_tracer).unwrap();
    assert_eq!(compile_tracer.lines().len(), 5);

    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    let m = a.run_traced("ab", MatchMode::Full, &mut tracer);
    assert_eq!(m.map(|m| m.end()), Some(2));
    assert_eq!(
        tracer.lines(),
        [
            "  step   S0 -> S1 on 'a'",
            "  step   S1 -> S2 on 'b'",
            "  accept S2 at 2",
        ]
    );
}

#[test]
fn shared_across_threads() {
    let a = compile("[ab]+c?").unwrap();
    let inputs = ["a", "abab", "abc", "c", "abcc", ""];
    let expected: Vec<bool> = inputs.iter().map(|t| a.is_full_match(t)).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    inputs
                        .iter()
                        .map(|t| a.is_full_match(t))
                        .collect::<Vec<bool>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    assert_eq!(expected, [true, true, true, false, false, false]);
}

#[test]
fn automaton_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Automaton>();
}
