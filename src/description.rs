//! Plain-text NFA descriptions.
//!
//! ```text
//! # comment
//! states: S, P, Z
//! alphabet: 0, 1
//! start: S, P
//! accept: Z
//! S, 0 -> P
//! S, 1 -> S, Z
//! P, ε -> Z
//! ```
//!
//! Lists are comma separated and empty entries are skipped. A transition whose
//! symbol is empty or `ε` is an ε-transition; any other text, `$` included, is
//! an ordinary symbol. An `ε` listed in the alphabet is skipped like an empty
//! entry. Without an `alphabet` section the alphabet is every symbol used by a
//! transition; with one, transitions on other symbols are ignored.

use std::str::FromStr;

use hashbrown::HashMap;
use log::debug;

pub use crate::error::DescriptionError;
use crate::fa::epsilon_nfa::{TransitionFunction, ENFA};
use crate::fa::state::State;
use crate::input_symbol::{InputSymbol, Label};

/// The S/P/Z automaton used as the default input of the command line tool.
pub const EXAMPLE: &str = "\
states: S, P, Z
alphabet: 0, 1
start: S, P
accept: Z
S, 0 -> P
S, 1 -> S, Z
P, ε -> Z
Z, 0 -> P
Z, 1 -> P
";

#[derive(Default)]
struct Sections {
    states: Option<Vec<State>>,
    alphabet: Option<Vec<InputSymbol>>,
    start: Option<Vec<State>>,
    accept: Option<Vec<State>>,
}

fn split_list(values: &str) -> impl Iterator<Item = &str> {
    values.split(',').map(str::trim).filter(|v| !v.is_empty())
}

fn state_list(values: &str) -> Vec<State> {
    split_list(values).map(State::new).collect()
}

fn store<T>(slot: &mut Option<T>, value: T, name: &str, line: usize) -> Result<(), DescriptionError> {
    if slot.is_some() {
        return Err(DescriptionError::DuplicateSection {
            line,
            name: name.to_string(),
        });
    }
    *slot = Some(value);
    Ok(())
}

impl Sections {
    fn set(&mut self, name: &str, values: &str, line: usize) -> Result<(), DescriptionError> {
        match name.to_ascii_lowercase().as_str() {
            "states" => store(&mut self.states, state_list(values), name, line),
            "start" => store(&mut self.start, state_list(values), name, line),
            "accept" => store(&mut self.accept, state_list(values), name, line),
            "alphabet" => {
                let alphabet = split_list(values)
                    .filter_map(|entry| match Label::parse(entry) {
                        Label::Symbol(symbol) => Some(symbol),
                        Label::Epsilon => {
                            debug!("line {}: skipping epsilon in the alphabet", line);
                            None
                        }
                    })
                    .collect();
                store(&mut self.alphabet, alphabet, name, line)
            }
            _ => Err(DescriptionError::UnknownSection {
                line,
                name: name.to_string(),
            }),
        }
    }
}

fn parse_source(source: &str, line: usize) -> Result<(State, Label), DescriptionError> {
    let (state, symbol) = source
        .split_once(',')
        .ok_or(DescriptionError::MalformedTransition { line })?;
    if symbol.contains(',') {
        return Err(DescriptionError::MalformedTransition { line });
    }
    let state = state.trim();
    if state.is_empty() {
        return Err(DescriptionError::MissingSourceState { line });
    }
    Ok((State::new(state), Label::parse(symbol)))
}

/// Reads an ENFA from its textual description.
pub fn parse_description(text: &str) -> Result<ENFA, DescriptionError> {
    let mut sections = Sections::default();
    let mut transition_function: TransitionFunction = HashMap::new();

    for (number, raw) in text.lines().enumerate() {
        let line = number + 1;
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        if let Some((source, targets)) = content.split_once("->") {
            let key = parse_source(source, line)?;
            transition_function
                .entry(key)
                .or_default()
                .extend(split_list(targets).map(State::new));
        } else if let Some((name, values)) = content.split_once(':') {
            sections.set(name.trim(), values, line)?;
        } else {
            return Err(DescriptionError::UnrecognizedLine { line });
        }
    }

    let start = sections.start.ok_or(DescriptionError::MissingStart)?;
    let alphabet = sections.alphabet.unwrap_or_else(|| {
        let mut used: Vec<InputSymbol> = transition_function
            .keys()
            .filter_map(|(_, label)| match label {
                Label::Symbol(symbol) => Some(symbol.clone()),
                Label::Epsilon => None,
            })
            .collect();
        used.sort();
        used.dedup();
        used
    });
    debug!(
        "description: {} symbols, {} transition entries, {} start states",
        alphabet.len(),
        transition_function.len(),
        start.len()
    );

    Ok(ENFA::new(
        sections.states.unwrap_or_default(),
        alphabet,
        transition_function,
        start,
        sections.accept.unwrap_or_default(),
    ))
}

impl FromStr for ENFA {
    type Err = DescriptionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_description(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fa::state::StateSet;

    #[test]
    fn test_example_parses() {
        let enfa = parse_description(EXAMPLE).unwrap();
        assert_eq!(enfa.states.len(), 3);
        assert_eq!(enfa.alphabet, vec![InputSymbol::new("0"), InputSymbol::new("1")]);
        assert_eq!(enfa.get_start_states(), StateSet::from_names(["S", "P"]));
        assert_eq!(
            enfa.targets(&State::new("S"), &Label::symbol("1")),
            StateSet::from_names(["S", "Z"])
        );
        assert_eq!(
            enfa.targets(&State::new("P"), &Label::Epsilon),
            StateSet::from_names(["Z"])
        );
    }

    #[test]
    fn test_source_needs_symbol_part() {
        assert_eq!(
            parse_source("S -", 4),
            Err(DescriptionError::MalformedTransition { line: 4 })
        );
        assert_eq!(
            parse_source(" , a", 2),
            Err(DescriptionError::MissingSourceState { line: 2 })
        );
        assert_eq!(
            parse_source("P,", 1),
            Ok((State::new("P"), Label::Epsilon))
        );
    }
}
