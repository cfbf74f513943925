pub mod dfa;
pub mod epsilon_nfa;
pub mod finite_automaton;
pub mod state;
pub mod subset_construction;
