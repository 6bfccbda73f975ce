//! Subset construction: converts a nondeterministic automaton into the
//! deterministic artifact executed by the `pattern-runtime` crate.
//!
//! A DFA state is a *value*: the set of NFA states it stands for. The
//! worklist keys discovered states by their canonical `BTreeSet` subset, so
//! two derivations reaching the same set collapse into one state no matter
//! the order of discovery, and dense ids are assigned deterministically.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use pattern_runtime::Dfa;

use crate::nfa::{Nfa, StateId};

/// The fixed-point expansion of `states` following only epsilon edges.
pub fn epsilon_closure(nfa: &Nfa, states: BTreeSet<StateId>) -> BTreeSet<StateId> {
    let mut closure = states.clone();
    let mut pending: Vec<StateId> = states.into_iter().collect();

    while let Some(state) = pending.pop() {
        for &target in nfa.epsilon_targets(state) {
            if closure.insert(target) {
                pending.push(target);
            }
        }
    }

    closure
}

/// Builds the deterministic automaton equivalent to `nfa`.
///
/// The start state is the epsilon-closure of the NFA start; a state accepts
/// iff its subset contains the NFA accept state; an empty move set denotes
/// the reject state and is left out of the transition rows. Terminates
/// because only previously-unseen subsets are enqueued and the number of
/// distinct subsets is finite.
pub fn from_nfa(nfa: &Nfa) -> Dfa {
    let start = epsilon_closure(nfa, BTreeSet::from([nfa.start()]));

    let mut ids: BTreeMap<BTreeSet<StateId>, usize> = BTreeMap::new();
    let mut subsets: Vec<BTreeSet<StateId>> = Vec::new();
    let mut transitions: Vec<BTreeMap<char, usize>> = Vec::new();

    ids.insert(start.clone(), 0);
    subsets.push(start.clone());
    transitions.push(BTreeMap::new());

    let mut worklist = VecDeque::from([(start, 0usize)]);
    while let Some((subset, id)) = worklist.pop_front() {
        for &symbol in nfa.alphabet() {
            let moves: BTreeSet<StateId> = subset
                .iter()
                .flat_map(|&state| nfa.literal_targets(state, symbol))
                .copied()
                .collect();
            if moves.is_empty() {
                continue;
            }

            let target = epsilon_closure(nfa, moves);
            let target_id = match ids.get(&target) {
                Some(&existing) => existing,
                None => {
                    let fresh = subsets.len();
                    ids.insert(target.clone(), fresh);
                    subsets.push(target.clone());
                    transitions.push(BTreeMap::new());
                    worklist.push_back((target, fresh));
                    fresh
                }
            };

            transitions[id].insert(symbol, target_id);
        }
    }

    let accepting = subsets
        .iter()
        .map(|subset| subset.contains(&nfa.accept()))
        .collect();

    Dfa::from_parts(0, transitions, accepting, nfa.alphabet().clone())
}
