//! The shared matcher seam: every search-facing surface consumes a
//! [TextMatcher] and receives a [MatchSet], regardless of whether the
//! matcher is a compiled automaton or an exact-substring engine.

use serde::Serialize;

pub mod boyer_moore;
pub mod kmp;

/// The ordered start offsets recorded by a scan, in scan order, plus the
/// total count. Offsets are character (code point) offsets and may repeat
/// when the producing matcher records multiple accepting extensions from
/// one start offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSet {
    pub offsets: Vec<usize>,
    pub total: usize,
}

impl MatchSet {
    pub fn new(offsets: Vec<usize>) -> Self {
        let total = offsets.len();
        Self { offsets, total }
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// A compiled, read-only pattern that can be scanned over in-memory text.
pub trait TextMatcher {
    /// Returns all match start offsets in scan order. A `max_matches` of
    /// zero or below means unbounded; a positive value stops the scan as
    /// soon as that many offsets have been recorded.
    fn find_all(&self, text: &str, max_matches: isize) -> MatchSet;
}

/// Normalizes a caller-supplied match cap: zero and negative values mean
/// unbounded.
pub(crate) fn normalized_limit(max_matches: isize) -> usize {
    if max_matches <= 0 {
        usize::MAX
    } else {
        max_matches as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_non_positive_caps_to_unbounded() {
        assert_eq!(usize::MAX, normalized_limit(0));
        assert_eq!(usize::MAX, normalized_limit(-1));
        assert_eq!(5, normalized_limit(5));
    }

    #[test]
    fn should_serialize_match_sets_for_structured_payloads() {
        let matches = MatchSet::new(vec![0, 0, 2]);

        let payload = serde_json::to_string(&matches).unwrap();
        assert_eq!(r#"{"offsets":[0,0,2],"total":3}"#, payload);
    }
}
