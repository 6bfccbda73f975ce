//! Thompson construction: compiles a syntax tree into a nondeterministic
//! finite automaton, fragment by fragment.
//!
//! States are arena-allocated and identified by dense indices from a single
//! monotonic counter spanning the whole compile, so every fragment gets
//! fresh ids. Epsilon edges are stored separately from literal edges, which
//! keeps closure computation in the DFA builder a plain walk.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::ast::SyntaxNode;

/// An index into the automaton's state arena.
pub type StateId = usize;

/// One arena slot: the outgoing edges of a single state. Multiple targets
/// per symbol are allowed; epsilon edges consume no input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct StateEntry {
    literal_edges: BTreeMap<char, Vec<StateId>>,
    epsilon_edges: Vec<StateId>,
}

/// A nondeterministic finite automaton with one start and exactly one
/// accept state. Immutable once built; construction never fails except by
/// propagating a parser failure upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    start: StateId,
    accept: StateId,
    states: Vec<StateEntry>,
    alphabet: BTreeSet<char>,
}

impl Nfa {
    /// Compiles a finalized syntax tree into an automaton.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pattern_compiler::nfa::Nfa;
    /// use pattern_compiler::parser::parse;
    ///
    /// let tree = parse("a|b").unwrap();
    /// let nfa = Nfa::from_syntax_tree(&tree);
    ///
    /// // Two fresh states per literal plus the alternation's entry/exit.
    /// assert_eq!(6, nfa.state_count());
    /// assert_eq!(vec!['a', 'b'], nfa.alphabet().iter().copied().collect::<Vec<_>>());
    /// ```
    pub fn from_syntax_tree(tree: &SyntaxNode) -> Self {
        let mut builder = Builder::default();
        let fragment = builder.fragment(tree);

        Self {
            start: fragment.entry,
            accept: fragment.exit,
            states: builder.states,
            alphabet: builder.alphabet,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// The set of literal symbols the automaton consumes; epsilon excluded.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// The states reachable from `state` by consuming `symbol`.
    pub fn literal_targets(&self, state: StateId, symbol: char) -> &[StateId] {
        self.states[state]
            .literal_edges
            .get(&symbol)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The states reachable from `state` without consuming input.
    pub fn epsilon_targets(&self, state: StateId) -> &[StateId] {
        &self.states[state].epsilon_edges
    }
}

/// A partial automaton under construction: the entry and exit states of a
/// compiled subtree, with its edges already present in the arena.
struct Fragment {
    entry: StateId,
    exit: StateId,
}

#[derive(Default)]
struct Builder {
    states: Vec<StateEntry>,
    alphabet: BTreeSet<char>,
}

impl Builder {
    fn new_state(&mut self) -> StateId {
        let id = self.states.len();
        self.states.push(StateEntry::default());
        id
    }

    fn add_literal_edge(&mut self, from: StateId, symbol: char, to: StateId) {
        self.states[from]
            .literal_edges
            .entry(symbol)
            .or_default()
            .push(to);
    }

    fn add_epsilon_edge(&mut self, from: StateId, to: StateId) {
        self.states[from].epsilon_edges.push(to);
    }

    fn fragment(&mut self, node: &SyntaxNode) -> Fragment {
        match node {
            SyntaxNode::Literal(symbol) => {
                let entry = self.new_state();
                let exit = self.new_state();
                self.alphabet.insert(*symbol);
                self.add_literal_edge(entry, *symbol, exit);

                Fragment { entry, exit }
            }
            SyntaxNode::Concat(left, right) => {
                let left = self.fragment(left);
                let right = self.fragment(right);
                self.add_epsilon_edge(left.exit, right.entry);

                Fragment {
                    entry: left.entry,
                    exit: right.exit,
                }
            }
            SyntaxNode::Alternate(left, right) => {
                let entry = self.new_state();
                let exit = self.new_state();
                let left = self.fragment(left);
                let right = self.fragment(right);

                self.add_epsilon_edge(entry, left.entry);
                self.add_epsilon_edge(entry, right.entry);
                self.add_epsilon_edge(left.exit, exit);
                self.add_epsilon_edge(right.exit, exit);

                Fragment { entry, exit }
            }
            SyntaxNode::Star(inner) => {
                let entry = self.new_state();
                let exit = self.new_state();
                let inner = self.fragment(inner);

                self.add_epsilon_edge(entry, inner.entry);
                self.add_epsilon_edge(inner.exit, inner.entry);
                self.add_epsilon_edge(inner.exit, exit);
                // zero iterations allowed
                self.add_epsilon_edge(entry, exit);

                Fragment { entry, exit }
            }
            SyntaxNode::Plus(inner) => {
                let entry = self.new_state();
                let exit = self.new_state();
                let inner = self.fragment(inner);

                self.add_epsilon_edge(entry, inner.entry);
                self.add_epsilon_edge(inner.exit, inner.entry);
                self.add_epsilon_edge(inner.exit, exit);

                Fragment { entry, exit }
            }
            SyntaxNode::Group(inner) => self.fragment(inner),
        }
    }
}

impl fmt::Display for Nfa {
    /// Renders the transition table with states in id order and symbols in
    /// code-point order, so the dump is identical across runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start: q{}", self.start)?;
        writeln!(f, "accept: q{}", self.accept)?;

        let alphabet: String = self.alphabet.iter().collect();
        writeln!(f, "alphabet: {}", alphabet)?;

        for (id, state) in self.states.iter().enumerate() {
            write!(f, "q{}:", id)?;
            for (symbol, targets) in &state.literal_edges {
                write!(f, " '{}' ->", symbol)?;
                for target in targets {
                    write!(f, " q{}", target)?;
                }
            }
            if !state.epsilon_edges.is_empty() {
                write!(f, " ε ->")?;
                for target in &state.epsilon_edges {
                    write!(f, " q{}", target)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
