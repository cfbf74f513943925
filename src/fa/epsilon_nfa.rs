use crate::fa::state::{State, StateSet};
use crate::input_symbol::{InputSymbol, Label};
use hashbrown::{HashMap, HashSet};
use log::debug;

/// Transition relation in its plain form: every (state, label) pair maps to
/// the set of states it may move to.
pub type TransitionFunction = HashMap<(State, Label), HashSet<State>>;

/// A nondeterministic finite automaton with epsilon transitions.
///
/// States and symbols are interned to indices on insertion. Epsilon edges are
/// stored apart from symbol edges, so epsilon is never part of the alphabet.
#[derive(Debug, Clone)]
pub struct ENFA {
    pub state_index_map: HashMap<State, usize>, // Map of state names to State indices
    pub alphabet_index_map: HashMap<InputSymbol, usize>, // Map of input symbols to indices

    pub states: Vec<State>,         // List of states
    pub alphabet: Vec<InputSymbol>, // Input symbols (alphabet)

    pub transitions: Vec<HashMap<usize, HashSet<usize>>>, // Transitions state -> input_symbol -> set of next states
    pub epsilon_transitions: Vec<HashSet<usize>>,         // Transitions state -> set of next states on ε
    pub start_states: HashSet<usize>,                     // Start states
    pub accept_states: HashSet<usize>,                    // Accept states
}

impl ENFA {
    /// Creates an ENFA from its declared parts.
    ///
    /// Transitions on a symbol missing from `alphabet` are dropped, the same
    /// as a transition that was never given. States referenced anywhere are
    /// added to the state list even if `states` does not declare them.
    pub fn new(
        states: impl IntoIterator<Item = State>,
        alphabet: impl IntoIterator<Item = InputSymbol>,
        transition_function: TransitionFunction,
        start_states: impl IntoIterator<Item = State>,
        accept_states: impl IntoIterator<Item = State>,
    ) -> Self {
        let mut enfa = ENFA::empty();
        for state in states {
            enfa.add_state(state);
        }
        for symbol in alphabet {
            enfa.add_symbol(symbol);
        }

        // Sorted so the interned indices do not depend on hash order
        let mut transition_function: Vec<_> = transition_function.into_iter().collect();
        transition_function.sort_by(|a, b| a.0.cmp(&b.0));
        for ((from, label), targets) in transition_function {
            if let Label::Symbol(symbol) = &label {
                if !enfa.alphabet_index_map.contains_key(symbol) {
                    debug!(
                        "ignoring transition {} --{}--> {:?}: symbol is not in the alphabet",
                        from, symbol, targets
                    );
                    continue;
                }
            }
            let mut targets: Vec<State> = targets.into_iter().collect();
            targets.sort();
            for to in targets {
                enfa.add_labeled_transition(&from, &label, &to);
            }
        }

        for state in start_states {
            enfa.add_start_state(state);
        }
        for state in accept_states {
            enfa.add_accept_state(state);
        }
        enfa
    }

    /// An ENFA without states; its only DFA is the dead state.
    pub fn empty() -> Self {
        ENFA {
            state_index_map: HashMap::new(),
            alphabet_index_map: HashMap::new(),
            states: vec![],
            alphabet: vec![],
            transitions: vec![],
            epsilon_transitions: vec![],
            start_states: HashSet::new(),
            accept_states: HashSet::new(),
        }
    }

    fn _state_index(&mut self, state: &State) -> usize {
        if let Some(&index) = self.state_index_map.get(state) {
            return index;
        }
        let index = self.states.len();
        self.states.push(state.clone());
        self.transitions.push(HashMap::new());
        self.epsilon_transitions.push(HashSet::new());
        self.state_index_map.insert(state.clone(), index);
        index
    }

    fn _symbol_index(&mut self, symbol: &InputSymbol) -> usize {
        *self
            .alphabet_index_map
            .entry(symbol.clone())
            .or_insert_with(|| {
                let index = self.alphabet.len();
                self.alphabet.push(symbol.clone());
                index
            })
    }

    /// Adds a state without any transitions
    pub fn add_state(&mut self, state: State) {
        self._state_index(&state);
    }

    /// Adds a symbol to the alphabet
    pub fn add_symbol(&mut self, symbol: InputSymbol) {
        self._symbol_index(&symbol);
    }

    /// Adds a start state
    pub fn add_start_state(&mut self, start_state: State) {
        let start_index = self._state_index(&start_state);
        self.start_states.insert(start_index);
    }

    /// Adds a new accept state
    pub fn add_accept_state(&mut self, accept_state: State) {
        let accept_index = self._state_index(&accept_state);
        self.accept_states.insert(accept_index);
    }

    /// Adds a transition from state `from` to state `to` on input `symbol`
    pub fn add_transition(&mut self, from: &State, symbol: &InputSymbol, to: &State) {
        let from_index = self._state_index(from);
        let to_index = self._state_index(to);
        let symbol_index = self._symbol_index(symbol);

        self.transitions[from_index]
            .entry(symbol_index)
            .or_default()
            .insert(to_index);
    }

    /// Adds an ε-transition from state `from` to state `to`
    pub fn add_epsilon_transition(&mut self, from: &State, to: &State) {
        let from_index = self._state_index(from);
        let to_index = self._state_index(to);
        self.epsilon_transitions[from_index].insert(to_index);
    }

    pub fn add_labeled_transition(&mut self, from: &State, label: &Label, to: &State) {
        match label {
            Label::Epsilon => self.add_epsilon_transition(from, to),
            Label::Symbol(symbol) => self.add_transition(from, symbol, to),
        }
    }

    pub fn get_states(&self) -> HashSet<State> {
        HashSet::from_iter(self.states.iter().cloned())
    }

    pub fn get_alphabet(&self) -> HashSet<InputSymbol> {
        HashSet::from_iter(self.alphabet.iter().cloned())
    }

    pub fn get_start_states(&self) -> StateSet {
        self._names(&self.start_states)
    }

    pub fn get_accept_states(&self) -> HashSet<State> {
        HashSet::from_iter(self.accept_states.iter().map(|&s| &self.states[s]).cloned())
    }

    pub fn is_accept_state(&self, state: &State) -> bool {
        self.state_index_map
            .get(state)
            .is_some_and(|index| self.accept_states.contains(index))
    }

    /// The states `state` moves to on `label`, without following ε afterwards
    pub fn targets(&self, state: &State, label: &Label) -> StateSet {
        let Some(&index) = self.state_index_map.get(state) else {
            return StateSet::new();
        };
        match label {
            Label::Epsilon => self._names(&self.epsilon_transitions[index]),
            Label::Symbol(symbol) => self
                .alphabet_index_map
                .get(symbol)
                .and_then(|symbol_index| self.transitions[index].get(symbol_index))
                .map(|targets| self._names(targets))
                .unwrap_or_default(),
        }
    }

    /// Every transition as (from, label, to), sorted
    pub fn get_transitions(&self) -> Vec<(State, Label, State)> {
        let mut transitions = Vec::new();
        for (from_state, transitions_map) in self.transitions.iter().enumerate() {
            for (symbol_index, to_states) in transitions_map.iter() {
                for &to_state in to_states {
                    transitions.push((
                        self.states[from_state].clone(),
                        Label::Symbol(self.alphabet[*symbol_index].clone()),
                        self.states[to_state].clone(),
                    ));
                }
            }
        }
        for (from_state, to_states) in self.epsilon_transitions.iter().enumerate() {
            for &to_state in to_states {
                transitions.push((
                    self.states[from_state].clone(),
                    Label::Epsilon,
                    self.states[to_state].clone(),
                ));
            }
        }
        transitions.sort();
        transitions
    }

    pub(crate) fn _names<'a>(&self, states: impl IntoIterator<Item = &'a usize>) -> StateSet {
        states
            .into_iter()
            .map(|&s| self.states[s].clone())
            .collect()
    }

    /// Epsilon-closure: computes all reachable states from a given set of states using ε-transitions
    pub(crate) fn _epsilon_closure(&self, states: HashSet<usize>) -> HashSet<usize> {
        let mut closure = states.clone();
        let mut stack: Vec<usize> = Vec::from_iter(states);

        while let Some(state) = stack.pop() {
            for &next_state in &self.epsilon_transitions[state] {
                if closure.insert(next_state) {
                    stack.push(next_state);
                }
            }
        }

        closure
    }

    /// Computes the epsilon-closure of a set of states.
    ///
    /// States this automaton does not know are kept in the result; they have
    /// no ε-transitions to follow.
    pub fn epsilon_closure<'a>(&self, states: impl IntoIterator<Item = &'a State>) -> StateSet {
        let mut unknown = StateSet::new();
        let mut known = HashSet::new();
        for state in states {
            match self.state_index_map.get(state) {
                Some(&index) => {
                    known.insert(index);
                }
                None => {
                    unknown.insert(state.clone());
                }
            }
        }
        let mut closure = self._names(&self._epsilon_closure(known));
        closure.extend(unknown);
        closure
    }

    /// Computes the states reached from `states` on `symbol`, before closure
    pub(crate) fn _next_states<'a>(
        &self,
        states: impl IntoIterator<Item = &'a usize>,
        symbol: usize,
    ) -> HashSet<usize> {
        let mut next_states = HashSet::new();

        for state in states {
            if let Some(next_states_set) = self.transitions[*state].get(&symbol) {
                next_states.extend(next_states_set);
            }
        }

        next_states
    }
}

impl Default for ENFA {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_insertion() {
        let mut enfa = ENFA::empty();
        enfa.add_transition(&State::new("b"), &InputSymbol::new("x"), &State::new("a"));
        enfa.add_epsilon_transition(&State::new("a"), &State::new("c"));

        assert_eq!(enfa.states, vec![State::new("b"), State::new("a"), State::new("c")]);
        assert_eq!(enfa.transitions.len(), 3);
        assert_eq!(enfa.epsilon_transitions.len(), 3);
        assert_eq!(enfa.alphabet, vec![InputSymbol::new("x")]);
    }

    #[test]
    fn test_epsilon_never_enters_alphabet() {
        let mut enfa = ENFA::empty();
        enfa.add_labeled_transition(&State::new("p"), &Label::Epsilon, &State::new("q"));
        assert!(enfa.alphabet.is_empty());
        assert_eq!(
            enfa.targets(&State::new("p"), &Label::Epsilon),
            StateSet::from_names(["q"])
        );
    }
}
