//! Boyer-Moore exact-substring matching, bad-character rule only.

use std::collections::BTreeMap;

use super::{normalized_limit, MatchSet, TextMatcher};

/// An exact-substring matcher using the bad-character heuristic alone: each
/// pattern symbol shifts by the distance from its last occurrence to the
/// pattern end (minimum one), and symbols absent from the pattern shift by
/// the full pattern length. The good-suffix rule is omitted, which keeps the
/// table a single symbol map while staying sub-linear on average.
///
/// Comparison is right to left per alignment. On a full match the alignment
/// advances by the table entry for the character immediately following the
/// match, or by one at the end of the text.
///
/// # Example
///
/// ```rust
/// use pattern_runtime::{BoyerMoore, TextMatcher};
///
/// let bm = BoyerMoore::new("aba");
///
/// let matches = bm.find_all("ababa", 0);
/// assert_eq!(vec![0, 2], matches.offsets);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoyerMoore {
    pattern: Vec<char>,
    shifts: BTreeMap<char, usize>,
    default_shift: usize,
}

impl BoyerMoore {
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let m = pattern.len();

        // Later occurrences overwrite earlier ones, so each symbol keeps the
        // shift for its last position in the pattern.
        let mut shifts = BTreeMap::new();
        for (i, &symbol) in pattern.iter().enumerate() {
            shifts.insert(symbol, (m - i - 1).max(1));
        }

        Self {
            pattern,
            shifts,
            default_shift: m,
        }
    }

    /// The shift applied when `symbol` is the character driving the next
    /// alignment.
    pub fn shift_for(&self, symbol: char) -> usize {
        self.shifts.get(&symbol).copied().unwrap_or(self.default_shift)
    }
}

impl TextMatcher for BoyerMoore {
    fn find_all(&self, text: &str, max_matches: isize) -> MatchSet {
        let limit = normalized_limit(max_matches);
        let text: Vec<char> = text.chars().collect();
        let n = text.len();
        let m = self.pattern.len();
        let mut offsets = Vec::new();

        // An empty pattern matches nothing rather than everywhere.
        if m == 0 {
            return MatchSet::new(offsets);
        }

        let mut i = 0;
        while i + m <= n {
            if offsets.len() >= limit {
                break;
            }

            let mut j = m;
            while j > 0 && self.pattern[j - 1] == text[i + j - 1] {
                j -= 1;
            }

            if j == 0 {
                offsets.push(i);
                if i + m < n {
                    i += self.shift_for(text[i + m]);
                } else {
                    i += 1;
                }
            } else {
                // Shift by the table entry for the mismatching text
                // character, not the pattern character.
                i += self.shift_for(text[i + j - 1]);
            }
        }

        MatchSet::new(offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_shift_by_distance_from_last_occurrence_to_pattern_end() {
        let bm = BoyerMoore::new("abcab");

        // 'a' last occurs at index 3, 'b' at index 4 (clamped to 1),
        // 'c' at index 2; everything else shifts the full length.
        assert_eq!(1, bm.shift_for('a'));
        assert_eq!(1, bm.shift_for('b'));
        assert_eq!(2, bm.shift_for('c'));
        assert_eq!(5, bm.shift_for('z'));
    }

    #[test]
    fn should_find_every_occurrence_in_scan_order() {
        let bm = BoyerMoore::new("ana");

        let matches = bm.find_all("banana", 0);
        assert_eq!(vec![1, 3], matches.offsets);
        assert_eq!(2, matches.total);
    }

    #[test]
    fn should_truncate_at_max_matches() {
        let bm = BoyerMoore::new("ana");

        assert_eq!(vec![1], bm.find_all("banana", 1).offsets);
    }

    #[test]
    fn should_match_nothing_on_degenerate_inputs() {
        assert!(BoyerMoore::new("").find_all("abc", 0).is_empty());
        assert!(BoyerMoore::new("abc").find_all("", 0).is_empty());
        assert!(BoyerMoore::new("abcd").find_all("abc", 0).is_empty());
    }

    #[test]
    fn should_agree_with_kmp_on_literal_patterns() {
        let text = "abracadabra abracadabra";
        for pattern in ["abra", "a", "cad", "ra a"] {
            let bm = BoyerMoore::new(pattern).find_all(text, 0);
            let kmp = super::super::kmp::Kmp::new(pattern).find_all(text, 0);

            assert_eq!(kmp, bm, "pattern {:?}", pattern);
        }
    }
}
