use pattern_compiler::{compile, SyntaxErrorKind};
use pattern_runtime::TextMatcher;

#[test]
fn should_accept_and_reject_per_the_pattern_language() {
    let dfa = compile("ab*a").unwrap();

    for accepted in ["aa", "aba", "abba", "abbba"] {
        assert!(dfa.accepts(accepted), "expected to accept {:?}", accepted);
    }
    for rejected in ["a", "ab", "b"] {
        assert!(!dfa.accepts(rejected), "expected to reject {:?}", rejected);
    }
}

#[test]
fn should_enumerate_accepted_words_shortest_first() {
    let dfa = compile("ab*a").unwrap();

    let expected: Vec<String> = ["aa", "aba", "abba", "abbba", "abbbba"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    assert_eq!(expected, dfa.generate_words(5, 150));
}

#[test]
fn should_match_identically_across_independent_compiles() {
    let corpus = [
        "abba",
        "the quick brown fox",
        "aabbaabbaa",
        "",
        "cabbage and abalone",
    ];

    let first = compile("ab*a").unwrap();
    let second = compile("ab*a").unwrap();

    for text in corpus {
        assert_eq!(
            first.find_all(text, 0),
            second.find_all(text, 0),
            "text {:?}",
            text
        );
    }
}

#[test]
fn should_record_every_accepting_extension_from_one_start_offset() {
    let dfa = compile("a+").unwrap();

    // One start offset is recorded once per accepting landing, not once per
    // start offset.
    let matches = dfa.find_all("aaa", 0);
    assert_eq!(vec![0, 0, 0, 1, 1, 2], matches.offsets);
    assert_eq!(6, matches.total);
}

#[test]
fn should_stop_the_scan_at_the_match_cap() {
    let dfa = compile("a+").unwrap();

    let unbounded = dfa.find_all("aaa", 0);
    let capped = dfa.find_all("aaa", 2);
    assert_eq!(&unbounded.offsets[..2], &capped.offsets[..]);
}

#[test]
fn should_reject_malformed_patterns_with_their_failure_class() {
    assert_eq!(
        SyntaxErrorKind::UnmatchedParenthesis,
        compile("(ab").unwrap_err().kind()
    );
    assert_eq!(
        SyntaxErrorKind::DanglingRepetition,
        compile("*ab").unwrap_err().kind()
    );
}
