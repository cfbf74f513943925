use super::dfa::DFA;
use super::epsilon_nfa::ENFA;
use super::state::State;
use super::subset_construction::nfa_to_dfa;

pub trait FiniteAutomaton {
    fn to_epsilon_automaton(&self) -> ENFA;

    fn to_deterministic(&self) -> DFA {
        nfa_to_dfa(&self.to_epsilon_automaton())
    }
}

impl FiniteAutomaton for ENFA {
    fn to_epsilon_automaton(&self) -> ENFA {
        // ENFA is already an epsilon automaton
        self.clone()
    }
}

impl FiniteAutomaton for DFA {
    /// Views the DFA as an ENFA without ε-transitions. Each state is named by
    /// the label of its set, so `{P,Z}` becomes the single state `{P,Z}`.
    /// Labels are distinct for distinct sets, so no two states merge.
    fn to_epsilon_automaton(&self) -> ENFA {
        let names: Vec<State> = self
            .states
            .iter()
            .map(|set| State::from_string(set.label()))
            .collect();

        let mut enfa = ENFA::empty();
        for state in &names {
            enfa.add_state(state.clone());
        }
        for symbol in self.get_alphabet() {
            enfa.add_symbol(symbol.clone());
        }
        for (from_state, transitions_map) in self.transitions.iter().enumerate() {
            for (&symbol_index, &to_state) in transitions_map.iter() {
                enfa.add_transition(
                    &names[from_state],
                    &self.alphabet[symbol_index],
                    &names[to_state],
                );
            }
        }
        enfa.add_start_state(names[self.start_state].clone());
        for &state in &self.accept_states {
            enfa.add_accept_state(names[state].clone());
        }
        enfa
    }

    fn to_deterministic(&self) -> DFA {
        // DFA is already deterministic
        self.clone()
    }
}
