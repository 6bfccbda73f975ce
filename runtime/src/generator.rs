//! Bounded enumeration of the strings accepted by a compiled automaton.

use std::collections::VecDeque;

use crate::Dfa;

impl Dfa {
    /// Enumerates up to `max_words` distinct accepted strings of at most
    /// `max_length` characters.
    ///
    /// The search expands breadth-first from the start state, one alphabet
    /// symbol at a time in ascending code-point order, and emits a string
    /// whenever the frontier reaches an accepting state. Output is therefore
    /// ordered by increasing length, then by symbol order, and is stable
    /// across runs. The length bound guarantees termination on cyclic
    /// automata; each queued string reaches exactly one state, so no
    /// duplicates can be produced.
    ///
    /// The empty string is emitted first whenever the start state accepts.
    pub fn generate_words(&self, max_words: usize, max_length: usize) -> Vec<String> {
        let mut words = Vec::new();
        if max_words == 0 {
            return words;
        }

        let mut frontier = VecDeque::new();
        frontier.push_back((self.start_state(), String::new(), 0usize));

        while let Some((state, word, length)) = frontier.pop_front() {
            if self.is_accepting(state) {
                words.push(word.clone());
                if words.len() >= max_words {
                    break;
                }
            }

            if length >= max_length {
                continue;
            }

            for (&symbol, &target) in self.transition_row(state) {
                let mut extended = word.clone();
                extended.push(symbol);
                frontier.push_back((target, extended, length + 1));
            }
        }

        words
    }
}
