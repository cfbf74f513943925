//! Subset construction: ε-NFA to DFA conversion.

use std::collections::{BTreeSet, VecDeque};

use hashbrown::{HashMap, HashSet};
use log::{debug, trace};

use crate::fa::dfa::DFA;
use crate::fa::epsilon_nfa::ENFA;
use crate::fa::state::{State, StateSet};

/// Computes the ε-closure of `states` in `nfa`.
pub fn epsilon_closure<'a>(nfa: &ENFA, states: impl IntoIterator<Item = &'a State>) -> StateSet {
    nfa.epsilon_closure(states)
}

/// Converts `nfa` into a DFA whose states are the sets of NFA states reachable
/// from the closure of the start states.
///
/// Every reached DFA state gets one transition per alphabet symbol. When no NFA
/// state moves on a symbol the transition leads to the empty set, which then
/// loops to itself on every symbol and never accepts.
pub fn nfa_to_dfa(nfa: &ENFA) -> DFA {
    debug!(
        "subset construction over {} states and {} symbols",
        nfa.states.len(),
        nfa.alphabet.len()
    );

    // DFA states are numbered in discovery order
    let mut subsets: Vec<BTreeSet<usize>> = Vec::new();
    let mut subset_index: HashMap<BTreeSet<usize>, usize> = HashMap::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    let start: BTreeSet<usize> = nfa
        ._epsilon_closure(nfa.start_states.clone())
        .into_iter()
        .collect();
    subset_index.insert(start.clone(), 0);
    subsets.push(start);
    queue.push_back(0);

    let mut transitions: Vec<HashMap<usize, usize>> = Vec::new();
    let mut accept_states: HashSet<usize> = HashSet::new();

    while let Some(current) = queue.pop_front() {
        // FIFO over discovery order: rows are produced in index order
        debug_assert_eq!(current, transitions.len());

        if subsets[current]
            .iter()
            .any(|state| nfa.accept_states.contains(state))
        {
            accept_states.insert(current);
        }

        let mut row = HashMap::with_capacity(nfa.alphabet.len());
        for symbol in 0..nfa.alphabet.len() {
            let raw_next = nfa._next_states(&subsets[current], symbol);
            let next: BTreeSet<usize> = nfa._epsilon_closure(raw_next).into_iter().collect();

            let next_index = match subset_index.get(&next) {
                Some(&index) => index,
                None => {
                    let index = subsets.len();
                    trace!("new DFA state {}: {}", index, nfa._names(&next));
                    subset_index.insert(next.clone(), index);
                    subsets.push(next);
                    queue.push_back(index);
                    index
                }
            };
            trace!(
                "{} --{}--> {}",
                nfa._names(&subsets[current]),
                nfa.alphabet[symbol],
                nfa._names(&subsets[next_index])
            );
            row.insert(symbol, next_index);
        }
        transitions.push(row);
    }

    let states: Vec<StateSet> = subsets.iter().map(|subset| nfa._names(subset)).collect();
    debug!(
        "subset construction produced {} states, {} accepting",
        states.len(),
        accept_states.len()
    );

    DFA::from_subsets(
        states,
        nfa.alphabet.clone(),
        transitions,
        0,
        accept_states,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_symbol::InputSymbol;

    #[test]
    fn test_subset_construction_basic() {
        // 0 -a-> 1, 0 -a-> 2, 1 -b-> 3(final), 2 -b-> 3(final)
        let mut nfa = ENFA::empty();
        let (a, b) = (InputSymbol::new("a"), InputSymbol::new("b"));
        nfa.add_start_state(State::new("0"));
        nfa.add_transition(&State::new("0"), &a, &State::new("1"));
        nfa.add_transition(&State::new("0"), &a, &State::new("2"));
        nfa.add_transition(&State::new("1"), &b, &State::new("3"));
        nfa.add_transition(&State::new("2"), &b, &State::new("3"));
        nfa.add_accept_state(State::new("3"));

        let dfa = nfa_to_dfa(&nfa);

        // {0}, {1,2}, {3} and the dead state
        assert_eq!(dfa.states.len(), 4);
        assert_eq!(dfa.get_start_state(), &StateSet::from_names(["0"]));
        let after_a = dfa.next_state(dfa.get_start_state(), &a).unwrap();
        assert_eq!(after_a, &StateSet::from_names(["1", "2"]));
        let after_ab = dfa.next_state(after_a, &b).unwrap();
        assert!(dfa.is_accepting(after_ab));
        assert!(dfa.dead_state().is_some());
    }

    #[test]
    fn test_empty_nfa_is_dead_state_only() {
        let nfa = ENFA::empty();
        let dfa = nfa_to_dfa(&nfa);

        assert_eq!(dfa.states, vec![StateSet::new()]);
        assert!(dfa.accept_states.is_empty());
        assert!(dfa.get_transitions().is_empty());
    }
}
