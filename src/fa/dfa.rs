use rustc_hash::FxHashSet;

use crate::fa::state::StateSet;
use crate::input_symbol::InputSymbol;
use hashbrown::{HashMap, HashSet};
use std::fmt::Display;

/// A deterministic automaton produced by subset construction.
///
/// Each state is the set of NFA states it stands for; `state_index_map` is
/// keyed by that set, so no two indices hold equal sets. A missing entry in
/// `transitions` means the automaton rejects on that symbol.
#[derive(Debug, Clone)]
pub struct DFA {
    pub state_index_map: HashMap<StateSet, usize>, // Map of state sets to state indices
    pub alphabet_index_map: HashMap<InputSymbol, usize>, // Map of input symbols to indices

    pub states: Vec<StateSet>,      // List of states
    pub alphabet: Vec<InputSymbol>, // Input symbols (alphabet)

    pub transitions: Vec<HashMap<usize, usize>>, // Transitions (state -> input_symbol -> next state)
    pub start_state: usize,                      // Start state
    pub accept_states: HashSet<usize>,           // Accept states
}

impl DFA {
    /// Creates a new DFA
    pub fn new(
        state_index_map: HashMap<StateSet, usize>,
        alphabet_index_map: HashMap<InputSymbol, usize>,
        states: Vec<StateSet>,
        alphabet: Vec<InputSymbol>,
        transitions: Vec<HashMap<usize, usize>>,
        start_state: usize,
        accept_states: HashSet<usize>,
    ) -> Self {
        DFA {
            state_index_map,
            alphabet_index_map,
            states,
            alphabet,
            transitions,
            start_state,
            accept_states,
        }
    }

    /// Creates a DFA from its states and alphabet, deriving both index maps
    pub fn from_subsets(
        states: Vec<StateSet>,
        alphabet: Vec<InputSymbol>,
        transitions: Vec<HashMap<usize, usize>>,
        start_state: usize,
        accept_states: HashSet<usize>,
    ) -> Self {
        let state_index_map = HashMap::from_iter(
            states
                .iter()
                .enumerate()
                .map(|(i, state)| (state.clone(), i)),
        );
        let alphabet_index_map = HashMap::from_iter(
            alphabet
                .iter()
                .enumerate()
                .map(|(i, symbol)| (symbol.clone(), i)),
        );
        DFA::new(
            state_index_map,
            alphabet_index_map,
            states,
            alphabet,
            transitions,
            start_state,
            accept_states,
        )
    }

    pub fn get_start_state(&self) -> &StateSet {
        &self.states[self.start_state]
    }

    pub fn get_states(&self) -> &[StateSet] {
        &self.states
    }

    pub fn get_alphabet(&self) -> &[InputSymbol] {
        &self.alphabet
    }

    pub fn get_accept_states(&self) -> HashSet<StateSet> {
        HashSet::from_iter(self.accept_states.iter().map(|&s| &self.states[s]).cloned())
    }

    /// Every transition as (from, symbol, to), sorted
    pub fn get_transitions(&self) -> Vec<(StateSet, InputSymbol, StateSet)> {
        let mut transitions = Vec::new();
        for (from_state, transitions_map) in self.transitions.iter().enumerate() {
            for (symbol_index, &to_state) in transitions_map.iter() {
                let from_state_name = self.states[from_state].clone();
                let to_state_name = self.states[to_state].clone();
                let symbol = self.alphabet[*symbol_index].clone();
                transitions.push((from_state_name, symbol, to_state_name));
            }
        }
        transitions.sort();
        transitions
    }

    pub fn is_accepting(&self, state: &StateSet) -> bool {
        self.state_index_map
            .get(state)
            .is_some_and(|index| self.accept_states.contains(index))
    }

    /// The empty set of NFA states, if construction ever reached it
    pub fn dead_state(&self) -> Option<&StateSet> {
        let dead = StateSet::new();
        self.state_index_map
            .get(&dead)
            .map(|&index| &self.states[index])
    }

    /// Returns the next state given the current state and input symbol
    fn _next_state(&self, state: usize, symbol: usize) -> Option<usize> {
        self.transitions
            .get(state)
            .and_then(|row| row.get(&symbol))
            .cloned()
    }

    pub fn next_state(&self, state: &StateSet, symbol: &InputSymbol) -> Option<&StateSet> {
        let state_index = *self.state_index_map.get(state)?;
        let symbol_index = *self.alphabet_index_map.get(symbol)?;
        self._next_state(state_index, symbol_index)
            .map(|next| &self.states[next])
    }

    /// Returns the set of reachable states from the given state
    pub fn reachable_states(&self, state: usize) -> FxHashSet<usize> {
        let mut reachable: FxHashSet<usize> = FxHashSet::from_iter(vec![state]);
        let mut stack = vec![state];

        while let Some(current_state) = stack.pop() {
            for (_, &next_state) in self.transitions[current_state].iter() {
                if reachable.insert(next_state) {
                    stack.push(next_state);
                }
            }
        }

        reachable
    }

    fn _sorted_states(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.states.len()).collect();
        order.sort_by(|&a, &b| self.states[a].cmp(&self.states[b]));
        order
    }

    fn _sorted_alphabet(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.alphabet.len()).collect();
        order.sort_by(|&a, &b| self.alphabet[a].cmp(&self.alphabet[b]));
        order
    }

    /// The transition function as a table: one row per state, one column per
    /// symbol of the sorted alphabet. Rows are sorted by state.
    pub fn transition_table(&self) -> Vec<(&StateSet, Vec<Option<&StateSet>>)> {
        let columns = self._sorted_alphabet();
        self._sorted_states()
            .into_iter()
            .map(|state| {
                let row = columns
                    .iter()
                    .map(|&symbol| {
                        self._next_state(state, symbol)
                            .map(|next| &self.states[next])
                    })
                    .collect();
                (&self.states[state], row)
            })
            .collect()
    }

    /// Renders [`DFA::transition_table`] as aligned text. The start state is
    /// marked with `->`, accepting states with `*` and missing moves with `-`.
    pub fn to_table(&self) -> String {
        let alphabet = self.get_alphabet();
        let mut rows: Vec<Vec<String>> = vec![std::iter::once(String::new())
            .chain(
                self._sorted_alphabet()
                    .into_iter()
                    .map(|symbol| alphabet[symbol].to_string()),
            )
            .collect()];
        for (state, targets) in self.transition_table() {
            let mut marker = String::new();
            if state == self.get_start_state() {
                marker.push_str("->");
            }
            if self.is_accepting(state) {
                marker.push('*');
            }
            let mut row = vec![format!("{}{}", marker, state)];
            row.extend(
                targets
                    .into_iter()
                    .map(|target| target.map_or_else(|| "-".to_string(), StateSet::label)),
            );
            rows.push(row);
        }

        let widths: Vec<usize> = (0..rows[0].len())
            .map(|column| {
                rows.iter()
                    .map(|row| row[column].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let mut output = String::new();
        for row in rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
                .collect();
            output.push_str(cells.join(" | ").trim_end());
            output.push('\n');
        }
        output
    }

    /// Renders the DFA as a Graphviz document. Accepting states are drawn
    /// with a double circle and an unlabeled node points at the start state.
    pub fn to_graphviz(&self) -> String {
        let mut output = String::from("digraph finite_state_machine {\n");
        output.push_str("\trankdir=LR;\n");
        for state in self._sorted_states() {
            let shape = if self.accept_states.contains(&state) {
                "doublecircle"
            } else {
                "circle"
            };
            output.push_str(&format!(
                "\t{} [shape = {}];\n",
                quote(&self.states[state].label()),
                shape
            ));
        }
        output.push_str("\tstart [label = \"\", shape = none];\n");
        output.push_str(&format!(
            "\tstart -> {};\n",
            quote(&self.get_start_state().label())
        ));
        for (from, symbol, to) in self.get_transitions() {
            output.push_str(&format!(
                "\t{} -> {} [label = {}];\n",
                quote(&from.label()),
                quote(&to.label()),
                quote(symbol.get_name())
            ));
        }
        output.push_str("}\n");
        output
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Display for DFA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut accept_states: Vec<StateSet> = self.get_accept_states().into_iter().collect();
        accept_states.sort();
        let mut alphabet = self.alphabet.clone();
        alphabet.sort();

        writeln!(f, "DFA {{")?;
        writeln!(f, "  Start State: {}", self.get_start_state())?;
        write!(f, "  Accept States:")?;
        for state in &accept_states {
            write!(f, " {}", state)?;
        }
        writeln!(f)?;
        write!(f, "  States:")?;
        for state in self._sorted_states() {
            write!(f, " {}", self.states[state])?;
        }
        writeln!(f)?;
        write!(f, "  Alphabet:")?;
        for symbol in &alphabet {
            write!(f, " {}", symbol)?;
        }
        writeln!(f)?;
        writeln!(f, "  Transitions:")?;
        for (from, symbol, to) in self.get_transitions() {
            writeln!(f, "    {} -- {} --> {}", from, symbol, to)?;
        }
        writeln!(f, "}}")
    }
}
