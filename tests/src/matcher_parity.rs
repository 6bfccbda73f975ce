use proptest::prelude::*;

use pattern_compiler::compile;
use pattern_runtime::{BoyerMoore, Kmp, TextMatcher};

/// All three engines over a literal-only pattern; the DFA path compiles the
/// pattern, the substring engines consume it raw.
fn literal_matchers(pattern: &str) -> Vec<Box<dyn TextMatcher>> {
    vec![
        Box::new(Kmp::new(pattern)),
        Box::new(BoyerMoore::new(pattern)),
        Box::new(compile(pattern).unwrap()),
    ]
}

#[test]
fn should_agree_across_engines_on_literal_patterns() {
    let cases = [
        ("aba", "ababa"),
        ("aa", "aaaa"),
        ("needle", "haystack with a needle and a needle"),
        ("z", "no such letter"),
    ];

    for (pattern, text) in cases {
        let kmp = Kmp::new(pattern).find_all(text, 0);
        let bm = BoyerMoore::new(pattern).find_all(text, 0);
        let dfa = compile(pattern).unwrap().find_all(text, 0);

        assert_eq!(kmp, bm, "pattern {:?}", pattern);
        assert_eq!(kmp, dfa, "pattern {:?}", pattern);
    }
}

#[test]
fn should_truncate_to_a_prefix_of_the_unbounded_scan_for_every_engine() {
    let text = "abababab";

    for matcher in literal_matchers("ab") {
        let unbounded = matcher.find_all(text, 0);
        for cap in 1..=unbounded.total {
            let capped = matcher.find_all(text, cap as isize);
            assert_eq!(&unbounded.offsets[..cap], &capped.offsets[..]);
        }
    }
}

#[test]
fn should_treat_negative_caps_as_unbounded_for_every_engine() {
    for matcher in literal_matchers("ab") {
        assert_eq!(
            matcher.find_all("abab", 0),
            matcher.find_all("abab", -7)
        );
    }
}

#[test]
fn should_handle_degenerate_inputs_without_failure() {
    // Empty pattern: the substring engines match nothing.
    assert!(Kmp::new("").find_all("text", 0).is_empty());
    assert!(BoyerMoore::new("").find_all("text", 0).is_empty());

    // Empty text and pattern longer than text: zero matches everywhere.
    for matcher in literal_matchers("abc") {
        assert!(matcher.find_all("", 0).is_empty());
        assert!(matcher.find_all("ab", 0).is_empty());
    }
}

proptest! {
    #[test]
    fn should_agree_between_kmp_and_boyer_moore_on_random_literals(
        pattern in "[ab]{1,4}",
        text in "[ab]{0,40}",
    ) {
        let kmp = Kmp::new(&pattern).find_all(&text, 0);
        let bm = BoyerMoore::new(&pattern).find_all(&text, 0);

        prop_assert_eq!(kmp, bm);
    }

    #[test]
    fn should_take_a_prefix_of_the_unbounded_scan_under_any_cap(
        pattern in "[ab]{1,3}",
        text in "[ab]{0,30}",
        cap in 1usize..6,
    ) {
        let matcher = Kmp::new(&pattern);

        let unbounded = matcher.find_all(&text, 0);
        let capped = matcher.find_all(&text, cap as isize);
        let expected = &unbounded.offsets[..cap.min(unbounded.total)];

        prop_assert_eq!(expected, &capped.offsets[..]);
    }
}
