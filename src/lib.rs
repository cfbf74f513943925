//! Conversion of nondeterministic finite automata with epsilon transitions into
//! deterministic ones by subset construction.
//!
//! ```
//! use nfa2dfa::fa::epsilon_nfa::ENFA;
//! use nfa2dfa::fa::state::{State, StateSet};
//! use nfa2dfa::fa::subset_construction::nfa_to_dfa;
//! use nfa2dfa::input_symbol::InputSymbol;
//!
//! let mut nfa = ENFA::empty();
//! nfa.add_start_state(State::new("q0"));
//! nfa.add_transition(&State::new("q0"), &InputSymbol::new("a"), &State::new("q1"));
//! nfa.add_epsilon_transition(&State::new("q1"), &State::new("q2"));
//! nfa.add_accept_state(State::new("q2"));
//!
//! let dfa = nfa_to_dfa(&nfa);
//! let next = dfa
//!     .next_state(dfa.get_start_state(), &InputSymbol::new("a"))
//!     .unwrap();
//! assert_eq!(next, &StateSet::from_names(["q1", "q2"]));
//! assert!(dfa.is_accepting(next));
//! ```

pub mod description;
mod error;
pub mod fa;
pub mod input_symbol;

pub use description::{parse_description, DescriptionError};
pub use fa::subset_construction::{epsilon_closure, nfa_to_dfa};
