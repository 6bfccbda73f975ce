//! Knuth-Morris-Pratt exact-substring matching.

use super::{normalized_limit, MatchSet, TextMatcher};

/// An exact-substring matcher that preprocesses the pattern into a failure
/// function, then scans the text in a single left-to-right pass without ever
/// re-reading consumed characters. O(m) to build, O(n + m) to scan.
///
/// Overlapping occurrences are reported: after a full match the automaton
/// position falls back through the failure function rather than resetting.
///
/// # Example
///
/// ```rust
/// use pattern_runtime::{Kmp, TextMatcher};
///
/// let kmp = Kmp::new("aba");
///
/// let matches = kmp.find_all("ababa", 0);
/// assert_eq!(vec![0, 2], matches.offsets);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kmp {
    pattern: Vec<char>,
    failure: Vec<usize>,
}

impl Kmp {
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let failure = failure_function(&pattern);

        Self { pattern, failure }
    }

    /// The length, per pattern position, of the longest proper prefix that
    /// is also a suffix of the pattern up to and including that position.
    pub fn failure_function(&self) -> &[usize] {
        &self.failure
    }
}

fn failure_function(pattern: &[char]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            failure[i] = len;
            i += 1;
        } else if len != 0 {
            len = failure[len - 1];
        } else {
            failure[i] = 0;
            i += 1;
        }
    }

    failure
}

impl TextMatcher for Kmp {
    fn find_all(&self, text: &str, max_matches: isize) -> MatchSet {
        let limit = normalized_limit(max_matches);
        let text: Vec<char> = text.chars().collect();
        let m = self.pattern.len();
        let mut offsets = Vec::new();

        // An empty pattern matches nothing rather than everywhere.
        if m == 0 {
            return MatchSet::new(offsets);
        }

        let mut i = 0;
        let mut j = 0;
        while i < text.len() {
            if offsets.len() >= limit {
                break;
            }
            if self.pattern[j] == text[i] {
                i += 1;
                j += 1;
            }
            if j == m {
                offsets.push(i - j);
                j = self.failure[j - 1];
            } else if i < text.len() && self.pattern[j] != text[i] {
                if j != 0 {
                    j = self.failure[j - 1];
                } else {
                    i += 1;
                }
            }
        }

        MatchSet::new(offsets)
    }
}
