//! Provides the executable artifacts produced by the `pattern-compiler`
//! crate along with the matchers that run them against in-memory text.
//!
//! The crate exposes three interchangeable matchers behind the
//! [TextMatcher] trait: a compiled [Dfa] for regular expressions, and the
//! exact-substring matchers [Kmp] and [BoyerMoore], which bypass the
//! automaton pipeline and work directly off the raw pattern string.
//!
//! # Example
//!
//! ```rust
//! use std::collections::{BTreeMap, BTreeSet};
//! use pattern_runtime::{Dfa, TextMatcher};
//!
//! // A hand-assembled automaton for the pattern `ab`.
//! let dfa = Dfa::from_parts(
//!     0,
//!     vec![
//!         BTreeMap::from([('a', 1)]),
//!         BTreeMap::from([('b', 2)]),
//!         BTreeMap::new(),
//!     ],
//!     vec![false, false, true],
//!     BTreeSet::from(['a', 'b']),
//! );
//!
//! let matches = dfa.find_all("xabab", 0);
//! assert_eq!(vec![1, 3], matches.offsets);
//! assert_eq!(2, matches.total);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

mod generator;
pub mod matcher;

pub use matcher::boyer_moore::BoyerMoore;
pub use matcher::kmp::Kmp;
pub use matcher::{MatchSet, TextMatcher};

/// A deterministic finite automaton over a finite alphabet of literal
/// symbols, produced by subset construction in the compiler crate.
///
/// States are dense indices. Each state owns one ordered transition row;
/// a symbol absent from the row denotes the reject state. The artifact is
/// immutable once built and safe to share across unrelated scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    start: usize,
    transitions: Vec<BTreeMap<char, usize>>,
    accepting: Vec<bool>,
    alphabet: BTreeSet<char>,
}

impl Dfa {
    /// Assembles an automaton from its constituent parts. `transitions` and
    /// `accepting` are indexed by state id and must be the same length.
    pub fn from_parts(
        start: usize,
        transitions: Vec<BTreeMap<char, usize>>,
        accepting: Vec<bool>,
        alphabet: BTreeSet<char>,
    ) -> Self {
        debug_assert_eq!(transitions.len(), accepting.len());

        Self {
            start,
            transitions,
            accepting,
            alphabet,
        }
    }

    pub fn start_state(&self) -> usize {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting.get(state).copied().unwrap_or(false)
    }

    /// Returns the target of the transition from `state` on `symbol`, or
    /// `None` for the reject state.
    pub fn transition(&self, state: usize, symbol: char) -> Option<usize> {
        self.transitions.get(state)?.get(&symbol).copied()
    }

    pub(crate) fn transition_row(&self, state: usize) -> &BTreeMap<char, usize> {
        &self.transitions[state]
    }

    /// Runs the automaton over the whole of `text`, returning whether it
    /// ends in an accepting state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::{BTreeMap, BTreeSet};
    /// use pattern_runtime::Dfa;
    ///
    /// let dfa = Dfa::from_parts(
    ///     0,
    ///     vec![BTreeMap::from([('a', 1)]), BTreeMap::new()],
    ///     vec![false, true],
    ///     BTreeSet::from(['a']),
    /// );
    ///
    /// assert!(dfa.accepts("a"));
    /// assert!(!dfa.accepts("aa"));
    /// assert!(!dfa.accepts(""));
    /// ```
    pub fn accepts(&self, text: &str) -> bool {
        let mut state = self.start;
        for symbol in text.chars() {
            match self.transition(state, symbol) {
                Some(next) => state = next,
                None => return false,
            }
        }

        self.is_accepting(state)
    }
}

impl TextMatcher for Dfa {
    /// Unanchored scan of `text`, simulating the automaton from every start
    /// offset in turn.
    ///
    /// Every time the simulation lands on an accepting state while extending
    /// a given start offset, that start offset is recorded again; one offset
    /// can therefore appear multiple times in the result. A start offset is
    /// abandoned as soon as a character falls outside the alphabet or the
    /// transition rejects. Offsets are in characters.
    fn find_all(&self, text: &str, max_matches: isize) -> MatchSet {
        let limit = matcher::normalized_limit(max_matches);
        let text: Vec<char> = text.chars().collect();
        let mut offsets = Vec::new();

        'starts: for start in 0..text.len() {
            let mut state = self.start;
            for &symbol in &text[start..] {
                if !self.alphabet.contains(&symbol) {
                    continue 'starts;
                }
                state = match self.transition(state, symbol) {
                    Some(next) => next,
                    None => continue 'starts,
                };
                if self.is_accepting(state) {
                    offsets.push(start);
                    if offsets.len() >= limit {
                        return MatchSet::new(offsets);
                    }
                }
            }
        }

        MatchSet::new(offsets)
    }
}

impl fmt::Display for Dfa {
    /// Renders the transition table. Rows and columns follow state id and
    /// code-point order, so the dump is identical across runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start: s{}", self.start)?;

        let accepting: Vec<String> = self
            .accepting
            .iter()
            .enumerate()
            .filter_map(|(id, &accept)| accept.then(|| format!("s{}", id)))
            .collect();
        writeln!(f, "accepting: {}", accepting.join(" "))?;

        let alphabet: String = self.alphabet.iter().collect();
        writeln!(f, "alphabet: {}", alphabet)?;

        for (id, row) in self.transitions.iter().enumerate() {
            write!(f, "s{}:", id)?;
            for (symbol, target) in row {
                write!(f, " '{}' -> s{}", symbol, target)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `a+` over the alphabet `{a}`: s0 -a-> s1 (accepting) -a-> s1.
    fn one_or_more_a() -> Dfa {
        Dfa::from_parts(
            0,
            vec![BTreeMap::from([('a', 1)]), BTreeMap::from([('a', 1)])],
            vec![false, true],
            BTreeSet::from(['a']),
        )
    }

    #[test]
    fn should_record_every_accepting_extension_per_start_offset() {
        let dfa = one_or_more_a();

        // Extending from offset 0 lands on an accepting state three times,
        // from offset 1 twice, and from offset 2 once.
        let matches = dfa.find_all("aaa", 0);
        assert_eq!(vec![0, 0, 0, 1, 1, 2], matches.offsets);
        assert_eq!(6, matches.total);
    }

    #[test]
    fn should_truncate_at_max_matches_in_scan_order() {
        let dfa = one_or_more_a();

        let matches = dfa.find_all("aaa", 4);
        assert_eq!(vec![0, 0, 0, 1], matches.offsets);
        assert_eq!(4, matches.total);
    }

    #[test]
    fn should_treat_negative_max_matches_as_unbounded() {
        let dfa = one_or_more_a();

        assert_eq!(dfa.find_all("aaa", 0), dfa.find_all("aaa", -3));
    }

    #[test]
    fn should_abandon_start_offsets_on_out_of_alphabet_characters() {
        let dfa = one_or_more_a();

        let matches = dfa.find_all("axa", 0);
        assert_eq!(vec![0, 2], matches.offsets);
    }

    #[test]
    fn should_return_no_matches_on_empty_text() {
        let dfa = one_or_more_a();

        assert_eq!(0, dfa.find_all("", 0).total);
    }

    #[test]
    fn should_render_a_canonical_transition_table() {
        let dfa = one_or_more_a();

        let expected = "start: s0\n\
                        accepting: s1\n\
                        alphabet: a\n\
                        s0: 'a' -> s1\n\
                        s1: 'a' -> s1\n";
        assert_eq!(expected, dfa.to_string());
    }
}
