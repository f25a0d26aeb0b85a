//! End-to-end behaviour of compiled patterns.

use crate::{Automaton, ErrorKind, compile};

fn automaton(pattern: &str) -> Automaton {
    compile(pattern).expect("pattern should compile")
}

#[test]
fn literal_patterns_fullmatch_themselves() {
    for pattern in ["a", "abc", "Hello", "x_1", "ümlaut"] {
        let a = automaton(pattern);
        assert!(a.is_full_match(pattern), "{pattern}");

        let mut chars = pattern.chars();
        chars.next_back();
        assert!(!a.is_full_match(chars.as_str()), "proper prefix of {pattern}");
        assert!(!a.is_full_match(&format!("{pattern}z")), "extended {pattern}");

        let altered: String = pattern
            .chars()
            .rev()
            .skip(1)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .chain(std::iter::once('9'))
            .collect();
        assert!(!a.is_full_match(&altered), "altered {pattern}");
    }
}

#[test]
fn wildcard_matches_one_alphanumeric() {
    let a = automaton(".");
    for text in ["a", "q", "Z", "0", "9"] {
        assert!(a.is_full_match(text), "{text}");
    }
    for text in ["", "-", "!", " ", "\t", "ab"] {
        assert!(!a.is_full_match(text), "{text:?}");
    }
}

#[test]
fn star() {
    let a = automaton("a*");
    assert!(a.is_full_match(""));
    assert!(a.is_full_match("a"));
    assert!(a.is_full_match("aaaa"));
    assert!(!a.is_full_match("b"));
}

#[test]
fn plus() {
    let a = automaton("a+");
    assert!(!a.is_full_match(""));
    assert!(a.is_full_match("a"));
    assert!(a.is_full_match("aaa"));
}

#[test]
fn question() {
    let a = automaton("a?");
    assert!(a.is_full_match(""));
    assert!(a.is_full_match("a"));
    assert!(!a.is_full_match("aa"));
}

#[test]
fn class() {
    let a = automaton("[abc]");
    assert!(a.is_full_match("a"));
    assert!(a.is_full_match("b"));
    assert!(a.is_full_match("c"));
    assert!(!a.is_full_match("d"));

    assert!(automaton("[abc]+").is_full_match("aabbc"));
}

#[test]
fn optional_in_the_middle() {
    let a = automaton("ab?c");
    assert!(a.is_full_match("abc"));
    assert!(a.is_full_match("ac"));
    assert!(!a.is_full_match("ab"));
    assert!(!a.is_full_match("abbc"));
}

#[test]
fn optional_class_at_the_end() {
    let a = automaton("a[bc]?");
    assert!(a.is_full_match("a"));
    assert!(a.is_full_match("ab"));
    assert!(a.is_full_match("ac"));
    assert!(!a.is_full_match("ad"));
}

#[test]
fn optional_before_plus() {
    let a = automaton("a?b+c");
    assert!(a.is_full_match("c"));
    assert!(a.is_full_match("abc"));
    assert!(a.is_full_match("abbc"));
    assert!(!a.is_full_match("bc"));
    assert!(!a.is_full_match("ac"));
}

#[test]
fn match_is_a_prefix_check() {
    let a = automaton("a");
    assert!(a.is_match("abc"));
    assert!(!a.is_full_match("abc"));
    assert!(!a.is_match(""));
    assert!(!a.is_match("ba"));
}

#[test]
fn empty_text_matches_only_nullable_patterns() {
    for pattern in ["a*", "[ab]?", "a*b*"] {
        let a = automaton(pattern);
        assert!(a.is_match(""), "{pattern}");
        assert!(a.is_full_match(""), "{pattern}");
    }
    for pattern in ["a", ".+", "[ab]", "a?b"] {
        let a = automaton(pattern);
        assert!(!a.is_match(""), "{pattern}");
        assert!(!a.is_full_match(""), "{pattern}");
    }
}

#[test]
fn malformed_patterns() {
    assert_eq!(compile("[").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(compile("$").unwrap_err().kind(), ErrorKind::Lex);
}

#[test]
fn identifier_example() {
    let a = automaton("[abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_].*");
    assert!(a.is_match("My_Var1"));
    assert!(a.is_match("_x"));
    assert!(!a.is_match("1x"));
}

#[test]
fn compilation_is_idempotent() {
    let patterns = ["a", "a*b", "ab?c", "[xyz]+.", "a?b?c?", "..?[ab]*"];
    let corpus = [
        "", "a", "b", "ab", "abc", "ac", "aab", "x", "xyz1", "zz", "a1", "abba", "cab", "_",
    ];
    for pattern in patterns {
        let first = automaton(pattern);
        let second = automaton(pattern);
        for text in corpus {
            assert_eq!(first.is_match(text), second.is_match(text), "{pattern} / {text}");
            assert_eq!(
                first.is_full_match(text),
                second.is_full_match(text),
                "{pattern} / {text}"
            );
        }
    }
}
