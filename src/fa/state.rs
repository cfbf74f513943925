use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct State {
    pub name: String, // The name of the state (e.g., "S", "q0")
}

impl State {
    /// Create a new State
    pub fn new(name: &str) -> Self {
        State {
            name: name.to_string(),
        }
    }

    /// Create a new State from a String
    pub fn from_string(name: String) -> Self {
        State { name }
    }

    /// Get the name of the state
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A set of NFA states, which is also the identity of a DFA state.
///
/// The members are kept ordered, so equal sets compare, hash and print the
/// same no matter in which order their states were discovered.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct StateSet {
    states: BTreeSet<State>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<'a, I: IntoIterator<Item = &'a str>>(names: I) -> Self {
        names.into_iter().map(State::new).collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// The empty set is the dead state of a DFA.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    pub fn insert(&mut self, state: State) -> bool {
        self.states.insert(state)
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter()
    }

    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.states.is_subset(&other.states)
    }

    /// Canonical text form, `{P,Z}` for the set of `P` and `Z`.
    ///
    /// Names that are empty or contain `,`, `{`, `}`, `"` or `\` are written
    /// as quoted strings, so distinct sets never share a label.
    pub fn label(&self) -> String {
        let names: Vec<String> = self
            .states
            .iter()
            .map(|state| label_name(state.get_name()))
            .collect();
        format!("{{{}}}", names.join(","))
    }
}

fn label_name(name: &str) -> String {
    if !name.is_empty() && !name.contains([',', '{', '}', '"', '\\']) {
        return name.to_string();
    }
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

impl FromIterator<State> for StateSet {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        StateSet {
            states: iter.into_iter().collect(),
        }
    }
}

impl Extend<State> for StateSet {
    fn extend<I: IntoIterator<Item = State>>(&mut self, iter: I) {
        self.states.extend(iter)
    }
}

impl IntoIterator for StateSet {
    type Item = State;
    type IntoIter = std::collections::btree_set::IntoIter<State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = &'a State;
    type IntoIter = std::collections::btree_set::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
